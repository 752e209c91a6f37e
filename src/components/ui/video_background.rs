//! Decorative looping background video, rendered as the first element of the
//! app shell so pages draw over it.

use leptos::prelude::*;

#[component]
pub fn VideoBackground() -> impl IntoView {
    view! {
        <div class="video-background">
            <video id="video" autoplay=true muted=true loop=true>
                <source src="/background-video.mp4" type="video/mp4" />
                "Your browser does not support video."
            </video>
        </div>
    }
}
