use std::collections::HashMap;
use std::sync::LazyLock;

/// Every user-facing template lives in this table so wording stays in one
/// place. Built once at startup, immutable afterwards. Placeholders use
/// `{name}` syntax and are filled by [`render`].
static MESSAGES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                "status.all-projects",
                "Current project statuses in server context \"{server}\"",
            ),
            (
                "status.project",
                "Current status for project \"{project}\" in server context \"{server}\".",
            ),
            (
                "status.app",
                "Current status for application \"{app}\" in project \"{project}\" in server context \"{server}\".",
            ),
            (
                "status.footer",
                "The projects listed above represent their current state known\n\
                 by the Ketch server. For more information about a project's applications and\n\
                 their current state, run 'ketch-cli status PROJECT-NAME'.",
            ),
            (
                "warn.app-flag-ignored",
                "The 'app' flag was included, but an application was also requested as an argument.\n\
                 The app flag will be ignored.",
            ),
            (
                "error.too-many-args",
                "No more than 1 target argument may be given.",
            ),
            (
                "error.app-not-found",
                "No application named \"{app}\" was found in project \"{project}\".",
            ),
        ])
    });

pub fn msg(key: &'static str) -> &'static str {
    MESSAGES.get(key).copied().unwrap_or(key)
}

/// Fill `{name}` placeholders in a template.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in substitutions {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
