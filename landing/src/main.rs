// SG Career Atlas Landing Page — Leptos 0.8 Edition

fn main() {
    career_atlas_landing::mount();
}
