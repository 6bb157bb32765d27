use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::navigation::AppLink;

const OFFERS: [(&str, &str); 4] = [
    (
        "Diverse Tours",
        "From the serene tea gardens of Sylhet to the bustling city life of Dhaka, our tours \
         cover every corner of Bangladesh.",
    ),
    (
        "Local Expertise",
        "Our local guides offer authentic insights, leading you to genuine cultural encounters \
         and off-the-beaten-path destinations.",
    ),
    (
        "Seamless Booking",
        "Our platform is designed to make your planning effortless, from finding the perfect \
         tour to secure online payment.",
    ),
    (
        "Personalized Service",
        "We're dedicated to making your trip uniquely yours. Our team is here to assist you \
         every step of the way.",
    ),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--about">
            <div class="about__hero">
                <h1>"Crafting Unforgettable Journeys in " <span class="hero__accent">"Bangladesh"</span></h1>
                <p>
                    "Discover the soul of a land rich with culture, nature, and history. We are your \
                     trusted partner in exploring Bangladesh, one breathtaking experience at a time."
                </p>
            </div>

            <div class="about__grid">
                <section class="card">
                    <h2 class="card__title">"Our Story"</h2>
                    <p class="card__subtitle">"Passion drives our every step."</p>
                    <p>
                        "Born from a deep love for travel and the vibrant landscapes of Bangladesh, our \
                         journey began with a simple idea: to share the country's hidden gems with the \
                         world. We believe that a great tour is more than just a trip; it's an immersive \
                         story, a personal adventure that leaves a lasting impact."
                    </p>
                </section>
                <section class="card">
                    <h2 class="card__title">"What We Offer"</h2>
                    <p class="card__subtitle">"Tailored experiences for every traveler."</p>
                    <div class="about__offers">
                        {OFFERS.iter().map(|(title, text)| view! {
                            <div class="about__offer">
                                {icon("map-pin")}
                                <div>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            </div>

            <div class="about__cta">
                <h3>"Ready to Start Your Adventure?"</h3>
                <p>"Explore our hand-picked tours and find the perfect trip that speaks to your wanderlust."</p>
                <AppLink route=AppRoute::Tours class="button button--primary button--large">"Explore Tours"</AppLink>
            </div>
        </div>
    }
}
