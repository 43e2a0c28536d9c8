/// Static route table for the dashboard shell.
pub mod paths {
    pub const HOME: &str = "/";
    pub const SIGN_IN: &str = "/auth/sign-in";
    pub const SIGN_UP: &str = "/auth/sign-up";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
    pub const OVERVIEW: &str = "/dashboard";
    pub const PROJECTS: &str = "/dashboard/projects";
    pub const ADD_PROJECT: &str = "/dashboard/addProject";
    pub const NOT_FOUND: &str = "/errors/not-found";

    pub fn project_detail(project_id: &str) -> String {
        format!("/project/{}", project_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavItem {
    pub key: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        key: "overview",
        title: "Overview",
        href: paths::OVERVIEW,
        icon: "chart-pie",
    },
    NavItem {
        key: "projects",
        title: "Projects",
        href: paths::PROJECTS,
        icon: "users",
    },
    NavItem {
        key: "error",
        title: "Error",
        href: paths::NOT_FOUND,
        icon: "x-square",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_embeds_id() {
        assert_eq!(paths::project_detail("p-42"), "/project/p-42");
    }

    #[test]
    fn nav_items_point_at_known_paths() {
        assert_eq!(NAV_ITEMS[1].href, paths::PROJECTS);
    }
}
