use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const TEAM: [(&str, &str); 5] = [
    ("Keane Small", "Executive Director"),
    ("Keitumetse Dimpe", "Program Manager"),
    ("Lifa Mbangata", "Head of Mentorship"),
    ("Raees Johaadien", "Volunteer Coordinator"),
    ("Ukhanyo Siyazi", "Impact Analyst"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="hero">
                <div class="container">
                    <h1>{ "Empowering Tomorrow's Leaders, Today" }</h1>
                    <p>
                        { "SproutSphere is dedicated to fostering the potential within high school learners, \
                           equipping them with the tools, knowledge, and support system to thrive in academics, \
                           careers, and life." }
                    </p>
                </div>
            </section>

            <section class="container">
                <h2>{ "Our Core Purpose" }</h2>
                <div class="two-column">
                    <div class="card">
                        <h3>{ "Our Mission" }</h3>
                        <p>
                            { "To empower high school students from underserved communities by providing \
                               comprehensive programs that enhance their academic performance, career readiness, \
                               mental well-being, and overall personal growth." }
                        </p>
                    </div>
                    <div class="card">
                        <h3>{ "Our Vision" }</h3>
                        <p>
                            { "A future where every high school student has equitable access to opportunities \
                               and resources, enabling them to achieve their full potential and become confident, \
                               resilient, and successful members of society." }
                        </p>
                    </div>
                </div>
            </section>

            <section class="container">
                <h2>{ "Our Journey: The Story Behind SproutSphere" }</h2>
                <p>
                    { "SproutSphere was founded in 2020 to give high school students in grades 10 to 12 the \
                       support they need to thrive academically, emotionally, and physically: free tutoring, \
                       sports, and access to mental health support." }
                </p>
                <p>
                    { "Over the years it has grown into a community where students receive academic help and \
                       also find a safe, inclusive space to develop mentally and socially. We believe in helping \
                       students sprout, grow, and achieve their fullest potential, both in and out of the classroom." }
                </p>
            </section>

            <section class="container">
                <h2>{ "Meet Our Dedicated Team" }</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|(name, role)| html! {
                        <div class="team-member">
                            <span class="avatar">{ name.chars().next().unwrap_or(' ') }</span>
                            <h3>{ *name }</h3>
                            <p>{ *role }</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>{ "Join Our Mission: Make a Difference" }</h2>
                    <p>{ "Your support helps us continue our vital work and be a part of their success story." }</p>
                    <Link<Route> to={Route::Donate} classes="btn btn-primary">{ "Support a Student Today" }</Link<Route>>
                </div>
            </section>
        </div>
    }
}
