use shared::models::BlogPost;
use yew::prelude::*;

use crate::services::api::ApiService;

const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&q=80";

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: BlogPost,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    let image = post.image_url.clone().unwrap_or_else(|| FALLBACK_IMAGE.to_string());

    html! {
        <article class="card post-card">
            <img src={image} alt={post.title.clone()} />
            <div class="post-body">
                <div class="post-meta">
                    <span class="badge">{ &post.category }</span>
                    <span>{ post.published_at.format("%B %-d, %Y").to_string() }</span>
                    <span>{ &post.read_time }</span>
                </div>
                <h3>{ &post.title }</h3>
                <p>{ &post.excerpt }</p>
            </div>
        </article>
    }
}

#[function_component(News)]
pub fn news() -> Html {
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);

    {
        let posts = posts.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_blog_posts().await {
                    Ok(fetched) => posts.set(fetched),
                    Err(e) => tracing::error!("Failed to fetch blog posts: {}", e),
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="news-page">
            <section class="hero">
                <div class="container">
                    <h1>{ "Stay Updated with SproutSphere!" }</h1>
                    <p>{ "Stories, study tips and career advice from our programs." }</p>
                </div>
            </section>
            <section class="container">
                if *loading {
                    <div class="loading"><div class="spinner"></div></div>
                } else if posts.is_empty() {
                    <p class="empty-state">{ "No posts yet. Check back soon." }</p>
                } else {
                    <div class="post-grid">
                        { for posts.iter().map(|post| html! { <PostCard post={post.clone()} /> }) }
                    </div>
                }
            </section>
        </div>
    }
}
