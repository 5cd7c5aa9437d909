//! Files written by `pagewright init`.
//!
//! Templates use `{{crate_name}}` and `{{base_url}}` placeholders.

/// Values substituted into the project templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    /// Cargo package name
    pub crate_name: String,
    /// Base URL of the site under test
    pub base_url: String,
}

/// (relative path, template) for every generated file
pub const PROJECT_TEMPLATES: [(&str, &str); 5] = [
    ("Cargo.toml", include_str!("templates/Cargo.toml.tmpl")),
    ("pagewright.yaml", include_str!("templates/pagewright.yaml.tmpl")),
    ("tests/common/mod.rs", include_str!("templates/common.rs.tmpl")),
    ("tests/login.rs", include_str!("templates/login.rs.tmpl")),
    ("tests/inventory.rs", include_str!("templates/inventory.rs.tmpl")),
];

/// Substitute placeholders
#[must_use]
pub fn render(template: &str, vars: &TemplateVars) -> String {
    template
        .replace("{{crate_name}}", &vars.crate_name)
        .replace("{{base_url}}", &vars.base_url)
}
