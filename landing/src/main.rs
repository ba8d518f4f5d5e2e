// Dash Appraisals Landing Page - Leptos 0.8 Edition
// Dash Appraisals (c)2024

fn main() {
    dash_landing::start();
}
