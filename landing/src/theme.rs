//! Design tokens: colors, type scale and responsive breakpoints.
//!
//! The stylesheet in [`crate::styles`] refers to these only through the CSS
//! custom properties produced by [`css_variables`].

/// Viewport widths (px) where the layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

pub const BREAKPOINTS: Breakpoints = Breakpoints {
    xs: 0,
    sm: 600,
    md: 900,
    lg: 1200,
    xl: 1536,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub secondary_contrast: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text_body: &'static str,
    pub text_muted: &'static str,
    pub footer_text: &'static str,
    pub star: &'static str,
}

pub const PALETTE: Palette = Palette {
    primary: "#1a3a6f",
    primary_light: "#2a4a8f",
    primary_dark: "#0a2a5f",
    secondary: "#4a7bff",
    secondary_contrast: "#ffffff",
    background: "#f8f9fa",
    paper: "#ffffff",
    text_body: "#4a5568",
    text_muted: "#718096",
    footer_text: "#8892b0",
    star: "#ffd700",
};

/// One step of the heading scale: desktop size, then the sizes used below
/// the `md` and `sm` breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeStep {
    pub name: &'static str,
    pub weight: u16,
    pub size: &'static str,
    pub size_md: &'static str,
    pub size_sm: &'static str,
}

pub const FONT_FAMILY: &str = "'Inter', sans-serif";

pub const TYPE_SCALE: [TypeStep; 4] = [
    TypeStep { name: "h1", weight: 800, size: "3.5rem", size_md: "2.5rem", size_sm: "2rem" },
    TypeStep { name: "h2", weight: 700, size: "2.5rem", size_md: "2rem", size_sm: "1.75rem" },
    TypeStep { name: "h3", weight: 700, size: "2rem", size_md: "2rem", size_sm: "1.5rem" },
    TypeStep { name: "h4", weight: 700, size: "1.5rem", size_md: "1.5rem", size_sm: "1.25rem" },
];

/// `:root { ... }` block plus the responsive heading sizes.
pub fn css_variables() -> String {
    let p = &PALETTE;
    let mut css = String::with_capacity(1024);
    css.push_str(":root {\n");
    for (name, value) in [
        ("primary", p.primary),
        ("primary-light", p.primary_light),
        ("primary-dark", p.primary_dark),
        ("secondary", p.secondary),
        ("secondary-contrast", p.secondary_contrast),
        ("background", p.background),
        ("paper", p.paper),
        ("text-body", p.text_body),
        ("text-muted", p.text_muted),
        ("footer-text", p.footer_text),
        ("star", p.star),
        ("font-family", FONT_FAMILY),
    ] {
        css.push_str(&format!("    --{name}: {value};\n"));
    }
    for step in TYPE_SCALE {
        css.push_str(&format!("    --{}-size: {};\n", step.name, step.size));
        css.push_str(&format!("    --{}-weight: {};\n", step.name, step.weight));
    }
    css.push_str("}\n");

    push_sizes_below(&mut css, BREAKPOINTS.md, |s| s.size_md);
    push_sizes_below(&mut css, BREAKPOINTS.sm, |s| s.size_sm);
    css
}

fn push_sizes_below(css: &mut String, width: u32, pick: impl Fn(&TypeStep) -> &'static str) {
    css.push_str(&format!("@media (max-width: {}px) {{\n    :root {{\n", width - 1));
    for step in &TYPE_SCALE {
        css.push_str(&format!("        --{}-size: {};\n", step.name, pick(step)));
    }
    css.push_str("    }\n}\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_expose_palette() {
        let css = css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: #1a3a6f;"));
        assert!(css.contains("--secondary: #4a7bff;"));
        assert!(css.contains("--h1-size: 3.5rem;"));
    }

    #[test]
    fn heading_sizes_shrink_at_breakpoints() {
        let css = css_variables();
        let md = css.find("@media (max-width: 899px)").unwrap();
        let sm = css.find("@media (max-width: 599px)").unwrap();
        assert!(md < sm);
        assert!(css[md..sm].contains("--h1-size: 2.5rem;"));
        assert!(css[sm..].contains("--h1-size: 2rem;"));
    }

    #[test]
    fn size_overrides_are_well_formed() {
        let mut css = String::new();
        push_sizes_below(&mut css, BREAKPOINTS.sm, |s| s.size_sm);
        assert_eq!(
            css,
            "@media (max-width: 599px) {\n    :root {\n        --h1-size: 2rem;\n        \
             --h2-size: 1.75rem;\n        --h3-size: 1.5rem;\n        --h4-size: 1.25rem;\n    }\n}\n"
        );
    }
}
