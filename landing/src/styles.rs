//! Page stylesheet.
//!
//! Colors and the heading scale come from [`crate::theme::css_variables`];
//! everything here refers to them through `var(--...)`. Breakpoints in the
//! media queries mirror [`crate::theme::BREAKPOINTS`] (`sm` 600, `md` 900,
//! `lg` 1200).

use crate::theme;

/// Full stylesheet: theme variables followed by [`SITE_CSS`].
pub fn site_css() -> String {
    let mut css = theme::css_variables();
    css.push_str(SITE_CSS);
    css
}

pub const SITE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    overflow-x: hidden;
    font-family: var(--font-family);
    background-color: var(--background);
    color: var(--text-body);
    line-height: 1.6;
}

h1, h2, h3, h4, h5, h6 {
    margin: 0 0 0.5em;
    color: var(--primary);
    line-height: 1.2;
}

h1 { font-size: var(--h1-size); font-weight: var(--h1-weight); letter-spacing: -0.02em; }
h2 { font-size: var(--h2-size); font-weight: var(--h2-weight); letter-spacing: -0.015em; }
h3 { font-size: var(--h3-size); font-weight: var(--h3-weight); letter-spacing: -0.01em; }
h4 { font-size: var(--h4-size); font-weight: var(--h4-weight); }
h5 { font-size: 1.25rem; font-weight: 700; }
h6 { font-size: 1.1rem; font-weight: 600; }

p { margin: 0 0 1em; }

a { color: inherit; text-decoration: none; }

::-webkit-scrollbar { width: 10px; }
::-webkit-scrollbar-track { background: #f1f1f1; }
::-webkit-scrollbar-thumb { background: var(--secondary); border-radius: 5px; }
::-webkit-scrollbar-thumb:hover { background: #3a6eff; }

.fab { font-size: 1.25rem; }

/* Layout */
.container {
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 24px;
    position: relative;
    z-index: 1;
}

.container-wide { max-width: 1536px; }

section {
    position: relative;
    overflow: hidden;
    padding: 80px 0;
}

.accent { color: var(--secondary); }

.section-header {
    text-align: center;
    max-width: 760px;
    margin: 0 auto 48px;
}

.section-subtitle {
    color: var(--primary-light);
    font-size: 1.15rem;
}

.section-title.underlined {
    text-align: center;
    margin-bottom: 48px;
}

.section-title.underlined::after {
    content: "";
    display: block;
    width: 80px;
    height: 4px;
    margin: 16px auto 0;
    border-radius: 2px;
    background: var(--secondary);
}

/* Buttons and chips */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 10px 24px;
    border: 2px solid transparent;
    border-radius: 8px;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
    transition: box-shadow 0.3s ease, background-color 0.3s ease;
}

.btn:hover { box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }
.btn-lg { padding: 12px 40px; font-weight: 700; font-size: 1.05rem; }
.btn-sm { padding: 6px 12px; }
.btn-block { width: 100%; }

.btn-secondary {
    background: var(--secondary);
    color: var(--secondary-contrast);
}

.btn-outline {
    background: transparent;
    color: var(--primary);
    border-color: var(--primary);
}

.btn-outline:hover { background: rgba(26, 58, 111, 0.05); }

.chip {
    display: inline-block;
    padding: 4px 14px;
    border-radius: 16px;
    font-size: 0.85rem;
    font-weight: 600;
}

.chip-glow {
    background: var(--secondary);
    color: #ffffff;
    font-weight: 800;
    box-shadow: 0 0 10px var(--secondary);
}

.chip-outline {
    margin: 0 6px 6px 0;
    border: 1px solid rgba(74, 123, 255, 0.4);
    color: var(--secondary);
    background: rgba(74, 123, 255, 0.08);
}

.icon-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 48px;
    height: 48px;
    border-radius: 50%;
    background: rgba(74, 123, 255, 0.1);
    color: var(--secondary);
    font-size: 1.25rem;
    flex-shrink: 0;
}

.icon-badge-lg { width: 72px; height: 72px; font-size: 2rem; margin-bottom: 16px; }

.card {
    background: var(--paper);
    border-radius: 16px;
    padding: 32px;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
    transition: all 0.3s ease;
}

.card:hover {
    transform: translateY(-8px);
    box-shadow: 0 12px 32px rgba(74, 123, 255, 0.2);
}

/* Decorative shapes */
.shape {
    position: absolute;
    width: var(--shape-size);
    height: var(--shape-size);
    border-radius: 50%;
    opacity: 0.15;
    z-index: 0;
    pointer-events: none;
}

/* Brand */
.brand-logo {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    transition: transform 0.3s ease;
}

.brand-logo:hover { transform: scale(1.05); }

.brand-name {
    font-weight: 900;
    font-size: 1.25rem;
    line-height: 1;
    letter-spacing: 1px;
    color: var(--secondary);
    text-shadow: 1px 1px 2px rgba(0, 0, 0, 0.1);
}

.brand-tagline {
    margin-top: -2px;
    font-weight: 600;
    font-size: 0.7rem;
    letter-spacing: 4px;
    color: var(--primary-light);
    opacity: 0.8;
}

.brand-logo-footer .brand-name { font-size: 1.8rem; }

/* Navbar */
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    background: transparent;
    box-shadow: none;
    backdrop-filter: blur(10px);
    transition: all 0.3s ease;
    color: var(--primary);
}

.navbar-solid {
    background: rgba(255, 255, 255, 0.95);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
}

.navbar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    min-height: 72px;
}

.navbar-links { display: flex; gap: 8px; }

.navbar-link {
    background: none;
    border: none;
    padding: 8px 12px;
    font: inherit;
    font-weight: 500;
    color: var(--primary);
    cursor: pointer;
    border-radius: 8px;
}

.navbar-link:hover { background: rgba(26, 58, 111, 0.05); }

.navbar-toggle {
    display: none;
    background: none;
    border: none;
    font-size: 1.4rem;
    color: var(--primary);
    cursor: pointer;
}

/* Mobile drawer */
.drawer-backdrop {
    position: fixed;
    inset: 0;
    z-index: 200;
    background: rgba(0, 0, 0, 0.4);
}

.drawer {
    position: fixed;
    top: 0;
    right: 0;
    bottom: 0;
    z-index: 201;
    width: 280px;
    max-width: 100vw;
    background: #ffffff;
    color: var(--primary);
    animation: drawer-in 0.25s ease-out;
}

@keyframes drawer-in {
    from { transform: translateX(100%); }
    to { transform: translateX(0); }
}

.drawer-header {
    display: flex;
    justify-content: flex-end;
    padding: 16px;
    background: rgba(255, 255, 255, 0.9);
}

.drawer-close {
    background: none;
    border: none;
    font-size: 1.4rem;
    color: var(--primary);
    cursor: pointer;
}

.drawer-list { list-style: none; margin: 0; padding: 20px 0; }

.drawer-item {
    display: flex;
    align-items: center;
    gap: 8px;
    width: 100%;
    padding: 12px 24px;
    background: none;
    border: none;
    font: inherit;
    font-weight: 500;
    color: var(--primary);
    text-align: left;
    cursor: pointer;
}

.drawer-item i { color: var(--secondary); }
.drawer-item:hover { background: rgba(74, 123, 255, 0.06); }

/* Hero */
.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 192px 0 96px;
    background: linear-gradient(135deg, #e6f0ff 0%, #ffffff 100%);
}

.hero-grid {
    display: grid;
    grid-template-columns: 7fr 5fr;
    gap: 48px;
    align-items: center;
}

.hero-title { padding-top: 16px; }

.hero-subtitle {
    margin-bottom: 32px;
    font-size: 1.25rem;
    font-weight: 300;
    color: var(--primary-light);
}

.hero-actions { display: flex; flex-wrap: wrap; gap: 16px; padding-top: 32px; }

.hero-card {
    position: relative;
    width: 100%;
    height: 500px;
    border-radius: 20px;
    overflow: hidden;
    border: 1px solid var(--primary-light);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}

.hero-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}

.hero-image:hover { transform: scale(1.05); }

.hero-card-overlay {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    padding: 32px;
    color: #ffffff;
    background: linear-gradient(to top, rgba(26, 58, 111, 0.9) 0%, transparent 100%);
}

.hero-card-title {
    display: flex;
    align-items: center;
    gap: 8px;
    color: #ffffff;
    font-size: 2rem;
    font-weight: 600;
}

.check-list { list-style: none; margin: 0; padding: 0; }

.check-list li {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    padding: 4px 0;
    font-weight: 300;
}

.check-list i { color: var(--secondary); margin-top: 5px; }

/* About */
.about { background: #ffffff; }

.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px;
}

.mission {
    margin-top: 24px;
    padding: 24px;
    border-left: 4px solid var(--secondary);
    border-radius: 0 8px 8px 0;
    background: rgba(74, 123, 255, 0.05);
}

.mission p { font-style: italic; margin: 0; }

.stat-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 48px 32px;
}

.stat { display: flex; align-items: center; gap: 16px; }
.stat h5 { margin: 0; }
.stat p { margin: 0; color: var(--text-muted); }
.stat-icon { font-size: 2.5rem; color: var(--secondary); }

.why-choose { margin-top: 80px; text-align: center; }

.why-choose-row {
    display: flex;
    gap: 24px;
    overflow-x: auto;
    padding: 16px 4px 24px;
    scrollbar-width: none;
}

.why-choose-row::-webkit-scrollbar { display: none; }

.why-card {
    flex: 0 0 260px;
    text-align: center;
    padding: 24px;
}

.why-card .icon-badge { width: 72px; height: 72px; font-size: 2rem; margin-bottom: 16px; }

/* Services */
.services { background: var(--background); }

.services-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 32px;
}

.service-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    height: 100%;
}

.service-card p { flex-grow: 1; }

/* Testimonials */
.testimonials { background: linear-gradient(to bottom, #f0f4f9, #e6f0ff); }

.testimonials-grid {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 32px;
}

.testimonial-card {
    display: flex;
    flex-direction: column;
    border: 1px solid var(--primary-light);
}

.stars { display: flex; gap: 4px; margin-bottom: 16px; color: var(--star); }

.testimonial-card blockquote {
    flex-grow: 1;
    margin: 0 0 24px;
    font-style: italic;
}

.testimonial-author {
    padding-top: 16px;
    border-top: 1px solid rgba(74, 123, 255, 0.2);
}

.testimonial-author h6 { margin: 0; }
.testimonial-author span { color: var(--primary-light); font-size: 0.9rem; }

/* Contact */
.contact { background: #ffffff; }

.contact-layout { display: flex; gap: 32px; align-items: stretch; }

.contact-panel {
    flex: 1;
    padding: 32px;
    border-radius: 16px;
    background: var(--paper);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
}

.contact-info { background: linear-gradient(135deg, #f5f8ff 0%, #ffffff 100%); }

.panel-title {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 24px;
}

.panel-title::before {
    content: "";
    width: 4px;
    height: 24px;
    border-radius: 2px;
    background: var(--secondary);
}

.contact-details {
    list-style: none;
    margin: 0 0 32px;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.contact-details li { display: flex; gap: 24px; }
.contact-details strong { display: block; color: var(--primary); }
.contact-details p, .contact-details a { margin: 0; color: var(--text-muted); }

.hours-line { margin: 0 0 12px; padding-left: 16px; border-left: 2px solid var(--secondary); }

.contact-form { display: flex; flex-direction: column; gap: 16px; }
.form-row { display: flex; gap: 16px; }
.form-row .field { flex: 1; }

.field { display: flex; flex-direction: column; gap: 6px; }
.field-label { font-size: 0.9rem; font-weight: 500; color: var(--primary); }

.field input,
.field select,
.field textarea {
    width: 100%;
    padding: 12px 14px;
    border: 1px solid #cbd5e0;
    border-radius: 8px;
    background: #ffffff;
    font: inherit;
    color: var(--text-body);
}

.field input:focus,
.field select:focus,
.field textarea:focus {
    outline: none;
    border-color: var(--secondary);
    box-shadow: 0 0 0 3px rgba(74, 123, 255, 0.15);
}

.form-status { min-height: 1.5em; margin: 0; color: var(--secondary); font-weight: 500; }

/* Footer */
.footer {
    padding: 48px 0 24px;
    background: var(--primary-dark);
    color: var(--footer-text);
    font-size: 0.85rem;
}

.footer-grid {
    display: grid;
    grid-template-columns: 4fr 2fr 2fr 4fr;
    gap: 24px;
    align-items: flex-start;
}

.footer-brand { display: flex; flex-direction: column; gap: 12px; }
.footer-blurb { margin: 0; line-height: 1.6; }

.footer-social { display: flex; flex-wrap: wrap; gap: 12px; }

.social-link {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 36px;
    height: 36px;
    border-radius: 50%;
    background: rgba(100, 255, 218, 0.1);
    color: var(--secondary);
    transition: all 0.2s ease;
}

.social-link:hover { background: rgba(100, 255, 218, 0.2); transform: scale(1.1); }
.social-link .fab { font-size: 1rem; }

.footer-column { display: flex; flex-direction: column; gap: 8px; }

.footer-heading {
    margin-bottom: 8px;
    color: #ffffff;
    font-size: 0.85rem;
    text-transform: uppercase;
    letter-spacing: 1px;
}

.footer-link { color: var(--footer-text); transition: color 0.2s ease; }
.footer-link:hover { color: var(--secondary); }

.footer-contact { display: flex; align-items: center; gap: 8px; }
.footer-contact i { color: var(--secondary); }

.newsletter-box { display: flex; gap: 8px; }

.newsletter-box input {
    flex: 1;
    min-width: 0;
    padding: 6px 10px;
    border: 1px solid rgba(136, 146, 176, 0.3);
    border-radius: 6px;
    background: rgba(255, 255, 255, 0.05);
    color: #ffffff;
    font: inherit;
}

.footer-bottom {
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 12px;
    margin-top: 32px;
    padding-top: 16px;
    border-top: 1px solid rgba(136, 146, 176, 0.2);
    font-size: 0.75rem;
}

.footer-legal { display: flex; gap: 16px; }

/* Scroll to top */
.scroll-top {
    position: fixed;
    right: 32px;
    bottom: 32px;
    z-index: 150;
    width: 48px;
    height: 48px;
    border: none;
    border-radius: 50%;
    background: var(--secondary);
    color: #ffffff;
    font-size: 1.1rem;
    cursor: pointer;
    box-shadow: 0 0 15px var(--secondary);
    transform: translateY(150%);
    opacity: 0;
    pointer-events: none;
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.scroll-top.visible {
    transform: translateY(0);
    opacity: 1;
    pointer-events: auto;
}

/* lg and below */
@media (max-width: 1199px) {
    .contact-layout { flex-direction: column; }
}

/* md and below */
@media (max-width: 899px) {
    section { padding: 48px 0; }
    .hero { padding: 128px 0 48px; }
    .hero-grid { grid-template-columns: 1fr; }
    .hero-card { display: none; }
    .hero-subtitle { font-size: 1rem; }
    .about-grid { grid-template-columns: 1fr; gap: 24px; }
    .stat-grid { gap: 16px; }
    .why-choose { margin-top: 32px; }
    .services-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 16px; }
    .testimonials-grid { grid-template-columns: 1fr; gap: 16px; }
    .navbar-links, .navbar-cta { display: none; }
    .navbar-toggle { display: inline-flex; }
    .drawer { width: 100%; }
    .shape { width: calc(var(--shape-size) / 1.5); height: calc(var(--shape-size) / 1.5); }
    .footer-grid { grid-template-columns: 1fr 1fr; }
    .footer-brand, .footer-newsletter { grid-column: 1 / -1; }
}

/* sm and below */
@media (max-width: 599px) {
    .container { padding: 0 16px; }
    .btn { padding: 8px 16px; font-size: 0.875rem; }
    .btn-lg { padding: 10px 28px; }
    .card, .contact-panel { padding: 24px; }
    .services-grid { grid-template-columns: 1fr; }
    .stat-grid { grid-template-columns: 1fr; }
    .form-row { flex-direction: column; }
    .shape { display: none; }
    .brand-name { font-size: 1.1rem; }
    .brand-tagline { font-size: 0.5rem; }
    .chip-glow { font-size: 0.75rem; }
    .scroll-top { right: 16px; bottom: 16px; width: 40px; height: 40px; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_css_starts_with_theme_variables() {
        let css = site_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".navbar-solid"));
    }

    #[test]
    fn every_section_anchor_has_a_rule() {
        for class in ["hero", "about", "services", "testimonials", "contact"] {
            assert!(
                SITE_CSS.contains(&format!(".{class} {{")),
                "missing stylesheet rule for .{class}"
            );
        }
    }

    #[test]
    fn scroll_top_hidden_until_visible_class() {
        let base = SITE_CSS.find(".scroll-top {").unwrap();
        let visible = SITE_CSS.find(".scroll-top.visible").unwrap();
        assert!(SITE_CSS[base..visible].contains("opacity: 0;"));
        assert!(SITE_CSS[visible..].contains("opacity: 1;"));
    }
}
