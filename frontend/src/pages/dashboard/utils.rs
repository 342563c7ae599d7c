use crate::{
    api::Role,
    router::{self, LANDING_PATH},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

fn describe(path: &str) -> &'static str {
    match path {
        "/profiles" => "Review every employee profile, including sensitive details",
        "/profiles/browse" => "Find colleagues and leave them feedback",
        "/feedback" => "Read the feedback your colleagues left for you",
        "/absence" => "Check your vacation allowance and requests",
        _ => "",
    }
}

/// Dashboard shortcuts: the role's navigation minus the dashboard itself.
pub fn quick_links(role: Role) -> Vec<QuickLink> {
    router::nav_for(role)
        .into_iter()
        .filter(|item| item.path != LANDING_PATH)
        .map(|item| QuickLink {
            title: item.label,
            description: describe(item.path),
            path: item.path,
        })
        .collect()
}

pub fn greeting(name: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or_default();
    if first.is_empty() {
        "Welcome back".to_string()
    } else {
        format!("Welcome back, {}", first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_links_skip_staff_pages() {
        let paths: Vec<_> = quick_links(Role::Manager).iter().map(|l| l.path).collect();
        assert_eq!(paths, vec!["/profiles", "/feedback"]);
    }

    #[test]
    fn staff_links_have_descriptions() {
        let links = quick_links(Role::Employee);
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|link| !link.description.is_empty()));
    }

    #[test]
    fn greeting_uses_first_name() {
        assert_eq!(greeting("Ada Lovelace"), "Welcome back, Ada");
        assert_eq!(greeting("  "), "Welcome back");
    }
}
