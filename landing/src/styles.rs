//! Stylesheet for the site.
//!
//! Injected once by `App` through a `<style>` element, so the WASM bundle and
//! `index.html` are all trunk has to serve.
//!
//! Animation hooks:
//!
//! - `.reveal` / `.reveal.revealed` - one-shot fade+slide when a section first
//!   scrolls into view. Stagger is set inline with `transition-delay`.
//! - `.tape` / `.tape.active` - tape measure extension (`scaleX`).

/// Complete CSS - slate/blue palette, responsive at 768px.
pub const SITE_CSS: &str = r#"
:root {
    --gray-900: #111827;
    --gray-800: #1f2937;
    --gray-700: #374151;
    --gray-600: #4b5563;
    --gray-300: #d1d5db;
    --gray-100: #f3f4f6;
    --gray-50: #f9fafb;
    --blue-600: #2563eb;
    --blue-700: #1d4ed8;
    --blue-400: #60a5fa;
    --blue-100: #dbeafe;
    --red-500: #ef4444;
    --yellow-400: #facc15;
    --container-max: 1280px;
    --nav-height: 64px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    color: var(--gray-900);
    line-height: 1.6;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.main {
    padding-top: var(--nav-height);
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border: none;
    border-radius: 8px;
    font-weight: 700;
    font-size: 1rem;
    padding: 12px 24px;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.2s ease, background 0.3s ease, box-shadow 0.3s ease;
}

.btn:hover { transform: scale(1.05); }
.btn:active { transform: scale(0.95); }

.btn-primary {
    background: var(--blue-600);
    color: #fff;
}

.btn-primary:hover {
    background: var(--blue-700);
    box-shadow: 0 10px 25px rgba(59, 130, 246, 0.3);
}

.btn-outline {
    background: transparent;
    color: #fff;
    border: 2px solid #fff;
}

.btn-outline:hover {
    background: #fff;
    color: var(--gray-900);
}

.btn-block { width: 100%; }
.btn-large { font-size: 1.125rem; padding: 16px 32px; }

/* Reveal-once */
.reveal {
    opacity: 0;
    transform: translateY(50px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}

.reveal.from-left { transform: translateX(-80px); }
.reveal.from-right { transform: translateX(80px); }
.reveal.pop { transform: scale(0); transition-duration: 0.5s; }

.reveal.revealed {
    opacity: 1;
    transform: none;
}

.section-header {
    text-align: center;
    margin-bottom: 64px;
}

.section-title {
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 700;
    margin: 0 0 24px;
}

.section-lead {
    font-size: 1.25rem;
    color: var(--gray-600);
    max-width: 48rem;
    margin: 0 auto;
}

/* Nav */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(17, 24, 39, 0.95);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(59, 130, 246, 0.2);
    animation: nav-drop 0.8s ease;
}

@keyframes nav-drop {
    from { transform: translateY(-100px); }
    to { transform: translateY(0); }
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    height: var(--nav-height);
}

.nav-brand {
    background: none;
    border: none;
    color: #fff;
    font-size: 1.5rem;
    font-weight: 700;
    cursor: pointer;
    transition: transform 0.2s ease;
}

.nav-brand:hover { transform: scale(1.05); }

.nav-links {
    display: flex;
    gap: 32px;
}

.nav-link {
    background: none;
    border: none;
    border-bottom: 2px solid transparent;
    color: var(--gray-300);
    font-size: 0.875rem;
    font-weight: 500;
    padding: 8px 12px;
    cursor: pointer;
    transition: color 0.2s ease, transform 0.2s ease;
}

.nav-link:hover { color: #fff; transform: scale(1.1); }

.nav-link.active {
    color: var(--blue-400);
    border-bottom-color: var(--blue-400);
}

.nav-burger {
    display: none;
    background: none;
    border: none;
    color: var(--gray-300);
    cursor: pointer;
}

.nav-burger svg { width: 24px; height: 24px; }

.nav-drawer {
    background: var(--gray-800);
    padding: 8px 8px 12px;
}

.nav-drawer-link {
    display: block;
    width: 100%;
    text-align: left;
    background: none;
    border: none;
    color: var(--gray-300);
    font-size: 1rem;
    font-weight: 500;
    padding: 8px 12px;
    cursor: pointer;
}

.nav-drawer-link:hover,
.nav-drawer-link.active {
    background: var(--gray-700);
}

.nav-drawer-link.active { color: var(--blue-400); }

@media (max-width: 767px) {
    .nav-links { display: none; }
    .nav-burger { display: block; }
}

@media (min-width: 768px) {
    .nav-drawer { display: none; }
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    color: #fff;
    text-align: center;
}

.hero-bg {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
}

.hero-content {
    position: relative;
    z-index: 10;
    max-width: 56rem;
    padding: 0 16px;
}

.hero-logo {
    position: relative;
    display: inline-block;
    margin-bottom: 32px;
}

.hero-letters {
    font-size: clamp(6rem, 12vw, 8rem);
    font-weight: 700;
    color: var(--blue-400);
}

.hero-letters span { display: inline-block; }
.hero-letters .tilt-left { transform: rotate(-12deg); }
.hero-letters .tilt-right { transform: rotate(12deg); }

.hero-house {
    position: absolute;
    top: -16px;
    right: -16px;
    width: 64px;
    height: 64px;
    background: var(--red-500);
    transform: rotate(12deg);
}

.hero-house::after {
    content: "";
    position: absolute;
    bottom: 8px;
    left: 24px;
    width: 8px;
    height: 16px;
    background: var(--yellow-400);
}

.hero-tape {
    position: absolute;
    bottom: -24px;
    left: 50%;
    transform: translateX(-50%);
}

.hero-title {
    font-size: clamp(2.25rem, 6vw, 3.75rem);
    font-weight: 700;
    letter-spacing: 0.05em;
    margin: 0 0 24px;
    text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.5);
}

.hero-tagline {
    font-size: 1.5rem;
    color: #e5e7eb;
    margin: 0 0 32px;
}

.hero-description {
    font-size: 1.25rem;
    max-width: 42rem;
    margin: 0 auto 48px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
}

.scroll-indicator {
    position: absolute;
    bottom: 32px;
    left: 50%;
    width: 24px;
    height: 40px;
    margin-left: -12px;
    border: 2px solid #fff;
    border-radius: 9999px;
    display: flex;
    justify-content: center;
    animation: bob 2s ease-in-out infinite;
}

.scroll-indicator::before {
    content: "";
    width: 4px;
    height: 12px;
    margin-top: 8px;
    background: #fff;
    border-radius: 9999px;
}

@keyframes bob {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(10px); }
}

/* Tape measure */
.tape-wrap { position: relative; }

.tape {
    position: relative;
    height: 32px;
    overflow: hidden;
    background: linear-gradient(to right, #facc15, #fde047);
    border: 2px solid #ca8a04;
    transform: scaleX(0);
    transform-origin: left;
    transition: transform 1s ease-in-out;
}

.tape.active { transform: scaleX(1); }

.tape-ticks {
    position: absolute;
    inset: 0;
    display: flex;
}

.tape-tick {
    position: relative;
    flex-shrink: 0;
    width: 40px;
    border-left: 2px solid #dc2626;
    font-size: 0.75rem;
    font-weight: 700;
    color: #991b1b;
    padding: 2px 4px;
    text-align: left;
}

.tape-end {
    position: absolute;
    right: 0;
    top: 0;
    width: 24px;
    height: 32px;
    background: linear-gradient(to right, var(--gray-700), var(--gray-600));
    border-left: 2px solid #ca8a04;
    transform: translateX(-20px);
    transition: transform 0.3s ease 0.5s;
}

.tape.active .tape-end { transform: none; }

.tape-readout {
    position: absolute;
    bottom: -32px;
    left: 50%;
    transform: translateX(-50%);
    background: var(--gray-800);
    color: #fff;
    padding: 4px 12px;
    border-radius: 4px;
    font-size: 0.875rem;
    font-weight: 700;
    animation: readout 0.4s ease 1s both;
}

@keyframes readout {
    from { opacity: 0; transform: translate(-50%, 10px); }
    to { opacity: 1; transform: translate(-50%, 0); }
}

/* Services */
.services {
    padding: 80px 0;
    background: var(--gray-50);
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 32px;
}

.service-card {
    background: #fff;
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.service-card.revealed:hover {
    transform: translateY(-10px);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}

.service-image {
    position: relative;
    height: 192px;
    overflow: hidden;
}

.service-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}

.service-image img:hover { transform: scale(1.1); }

.service-body { padding: 24px; }
.service-body h3 { font-size: 1.5rem; margin: 0 0 12px; }
.service-body p { color: var(--gray-600); margin: 0 0 16px; }

.bullet-list {
    list-style: none;
    padding: 0;
    margin: 0 0 24px;
}

.bullet-list li {
    display: flex;
    align-items: center;
    gap: 12px;
    color: var(--gray-700);
    margin-bottom: 8px;
}

.bullet-list li::before {
    content: "";
    width: 8px;
    height: 8px;
    background: var(--blue-600);
    border-radius: 9999px;
}

/* About */
.about {
    padding: 80px 0;
    background: #fff;
}

.team-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(360px, 1fr));
    gap: 48px;
}

.team-card {
    display: flex;
    flex-wrap: wrap;
    gap: 24px;
    background: var(--gray-50);
    border-radius: 12px;
    padding: 32px;
}

.team-photo {
    width: 128px;
    height: 128px;
    border-radius: 9999px;
    overflow: hidden;
    flex-shrink: 0;
}

.team-photo img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.team-info { flex: 1; }
.team-info h3 { font-size: 1.5rem; margin: 0 0 8px; }
.team-role { color: var(--blue-600); font-weight: 600; margin: 0 0 8px; }
.team-experience { color: var(--gray-600); margin: 0 0 12px; }

.chips {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin: 8px 0 16px;
}

.chip {
    background: var(--blue-100);
    color: #1e40af;
    padding: 4px 12px;
    border-radius: 9999px;
    font-size: 0.875rem;
}

/* Areas */
.areas {
    position: relative;
    padding: 80px 0;
    overflow: hidden;
    background: var(--gray-900);
    color: #fff;
}

.areas-bg {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    background-size: cover;
    background-position: center;
}

.areas .container { position: relative; z-index: 10; }
.areas .section-lead { color: var(--gray-300); }

.county-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 24px;
}

@media (max-width: 767px) {
    .county-grid { grid-template-columns: repeat(2, 1fr); }
}

.county-tile {
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    padding: 24px;
    text-align: center;
}

.county-tile h3 { font-size: 1.125rem; margin: 0; }

.county-tile.office { border-color: rgba(96, 165, 250, 0.6); }

.county-tile.revealed:hover {
    transform: scale(1.05);
    background: rgba(59, 130, 246, 0.2);
}

.areas-footer {
    text-align: center;
    margin-top: 48px;
}

.areas-footer p {
    font-size: 1.125rem;
    color: var(--gray-300);
    margin: 0 0 32px;
}

/* Contact */
.contact {
    padding: 80px 0;
    background: var(--gray-50);
}

.contact-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(360px, 1fr));
    gap: 48px;
}

.contact-banner {
    position: relative;
    height: 256px;
    border-radius: 8px;
    overflow: hidden;
    background-size: cover;
    background-position: center;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    text-align: center;
    margin-bottom: 32px;
}

.contact-banner h3 { font-size: 1.875rem; margin: 0 0 16px; }

.contact-card {
    display: flex;
    align-items: center;
    gap: 16px;
    padding: 16px;
    margin-bottom: 24px;
    background: #fff;
    border-radius: 8px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    color: inherit;
    text-decoration: none;
    transition: transform 0.2s ease;
}

.contact-card:hover { transform: scale(1.02); }

.contact-icon {
    width: 48px;
    height: 48px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--blue-100);
    border-radius: 9999px;
    font-size: 1.5rem;
}

.contact-card h4 { margin: 0; }
.contact-card p { margin: 0; color: var(--blue-600); }

.contact-form {
    background: #fff;
    padding: 32px;
    border-radius: 12px;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    display: grid;
    gap: 24px;
}

.form-row {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 24px;
}

.form-field label {
    display: block;
    font-weight: 600;
    color: var(--gray-700);
    margin-bottom: 8px;
}

.form-field input,
.form-field textarea {
    width: 100%;
    padding: 12px 16px;
    border: 1px solid var(--gray-300);
    border-radius: 8px;
    font: inherit;
    transition: box-shadow 0.3s ease, border-color 0.3s ease;
}

.form-field input:focus,
.form-field textarea:focus {
    outline: none;
    border-color: transparent;
    box-shadow: 0 0 0 2px var(--blue-600);
}

/* Footer */
.footer {
    background: var(--gray-900);
    color: #fff;
    padding: 48px 0;
}

.footer-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 32px;
}

.footer h3 { font-size: 1.5rem; margin: 0 0 16px; }
.footer h4 { font-size: 1.125rem; margin: 0 0 16px; }
.footer p { color: var(--gray-300); margin: 0 0 8px; }
.footer-muted { color: #9ca3af; }

.footer-links {
    list-style: none;
    padding: 0;
    margin: 0;
}

.footer-link {
    background: none;
    border: none;
    padding: 0;
    margin-bottom: 8px;
    color: var(--gray-300);
    font: inherit;
    cursor: pointer;
    text-decoration: none;
}

.footer-link:hover { color: #fff; }

.footer-bottom {
    border-top: 1px solid var(--gray-700);
    margin-top: 32px;
    padding-top: 32px;
    text-align: center;
    color: #9ca3af;
}
"#;
