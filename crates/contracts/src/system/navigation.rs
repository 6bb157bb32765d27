//! Route table, role gating, navbar links and dashboard sidebars.

use super::auth::{Role, UserInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminPage {
    Analytics,
    AddTour,
    AddTourType,
    AddDivision,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserPage {
    Bookings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    About,
    Tours,
    TourDetails(String),
    Booking(String),
    Login,
    Unauthorized,
    Admin(AdminPage),
    User(UserPage),
    NotFound,
}

/// Outcome of checking a route against the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    LoginRequired,
    Forbidden,
}

impl AppRoute {
    /// Parses a location path. Query string and trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppRoute::Home,
            ["about"] => AppRoute::About,
            ["tours"] => AppRoute::Tours,
            ["tours", id] => AppRoute::TourDetails(id.to_string()),
            ["booking", id] => AppRoute::Booking(id.to_string()),
            ["login"] => AppRoute::Login,
            ["unauthorized"] => AppRoute::Unauthorized,
            ["admin"] | ["admin", "analytics"] => AppRoute::Admin(AdminPage::Analytics),
            ["admin", "add-tour"] => AppRoute::Admin(AdminPage::AddTour),
            ["admin", "add-tour-type"] => AppRoute::Admin(AdminPage::AddTourType),
            ["admin", "add-division"] => AppRoute::Admin(AdminPage::AddDivision),
            ["user"] | ["user", "bookings"] => AppRoute::User(UserPage::Bookings),
            _ => AppRoute::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::About => "/about".to_string(),
            AppRoute::Tours => "/tours".to_string(),
            AppRoute::TourDetails(id) => format!("/tours/{}", id),
            AppRoute::Booking(id) => format!("/booking/{}", id),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Unauthorized => "/unauthorized".to_string(),
            AppRoute::Admin(AdminPage::Analytics) => "/admin/analytics".to_string(),
            AppRoute::Admin(AdminPage::AddTour) => "/admin/add-tour".to_string(),
            AppRoute::Admin(AdminPage::AddTourType) => "/admin/add-tour-type".to_string(),
            AppRoute::Admin(AdminPage::AddDivision) => "/admin/add-division".to_string(),
            AppRoute::User(UserPage::Bookings) => "/user/bookings".to_string(),
            AppRoute::NotFound => "/404".to_string(),
        }
    }

    /// Roles allowed on the route. `None` means public, an empty slice
    /// means any signed-in user.
    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            AppRoute::Admin(_) => Some(&[Role::SuperAdmin, Role::Admin]),
            AppRoute::User(_) => Some(&[Role::User]),
            AppRoute::Booking(_) => Some(&[]),
            _ => None,
        }
    }

    /// UI gating only; the backend enforces the same rules on every request.
    pub fn access(&self, user: Option<&UserInfo>) -> Access {
        match (self.required_roles(), user) {
            (None, _) => Access::Granted,
            (Some(_), None) => Access::LoginRequired,
            (Some([]), Some(_)) => Access::Granted,
            (Some(roles), Some(u)) if roles.contains(&u.role) => Access::Granted,
            (Some(_), Some(_)) => Access::Forbidden,
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self, AppRoute::Admin(_) | AppRoute::User(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub title: &'static str,
    pub route: AppRoute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarGroup {
    pub title: &'static str,
    pub items: Vec<SidebarItem>,
}

fn admin_sidebar() -> Vec<SidebarGroup> {
    vec![
        SidebarGroup {
            title: "Dashboard",
            items: vec![SidebarItem {
                title: "Analytics",
                route: AppRoute::Admin(AdminPage::Analytics),
            }],
        },
        SidebarGroup {
            title: "Tour Management",
            items: vec![
                SidebarItem {
                    title: "Add Tour Type",
                    route: AppRoute::Admin(AdminPage::AddTourType),
                },
                SidebarItem {
                    title: "Add Division",
                    route: AppRoute::Admin(AdminPage::AddDivision),
                },
                SidebarItem {
                    title: "Add Tour",
                    route: AppRoute::Admin(AdminPage::AddTour),
                },
            ],
        },
    ]
}

fn user_sidebar() -> Vec<SidebarGroup> {
    vec![SidebarGroup {
        title: "History",
        items: vec![SidebarItem {
            title: "Bookings",
            route: AppRoute::User(UserPage::Bookings),
        }],
    }]
}

pub fn sidebar_items(role: Option<Role>) -> Vec<SidebarGroup> {
    match role {
        Some(Role::SuperAdmin) | Some(Role::Admin) => admin_sidebar(),
        Some(Role::User) => user_sidebar(),
        None => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: AppRoute,
}

/// Public links followed by the dashboard link of `role`
pub fn nav_links(role: Option<Role>) -> Vec<NavLink> {
    let mut links = vec![
        NavLink { label: "Home", route: AppRoute::Home },
        NavLink { label: "About", route: AppRoute::About },
        NavLink { label: "Tours", route: AppRoute::Tours },
    ];
    match role {
        Some(r) if r.is_admin() => links.push(NavLink {
            label: "Dashboard",
            route: AppRoute::Admin(AdminPage::Analytics),
        }),
        Some(_) => links.push(NavLink {
            label: "Dashboard",
            route: AppRoute::User(UserPage::Bookings),
        }),
        None => {}
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            role,
            picture: None,
        }
    }

    #[test]
    fn test_parse_and_path() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Home);
        assert_eq!(AppRoute::parse(""), AppRoute::Home);
        assert_eq!(AppRoute::parse("/tours?division=d1"), AppRoute::Tours);
        assert_eq!(AppRoute::parse("/tours/abc/"), AppRoute::TourDetails("abc".to_string()));
        assert_eq!(AppRoute::parse("/booking/abc"), AppRoute::Booking("abc".to_string()));
        assert_eq!(AppRoute::parse("/admin"), AppRoute::Admin(AdminPage::Analytics));
        assert_eq!(AppRoute::parse("/user"), AppRoute::User(UserPage::Bookings));
        assert_eq!(AppRoute::parse("/tours/a/b"), AppRoute::NotFound);

        for route in [
            AppRoute::About,
            AppRoute::Booking("x1".to_string()),
            AppRoute::Admin(AdminPage::AddTourType),
            AppRoute::Admin(AdminPage::AddDivision),
            AppRoute::User(UserPage::Bookings),
        ] {
            assert_eq!(AppRoute::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_access() {
        let admin = user(Role::Admin);
        let plain = user(Role::User);
        let add_tour = AppRoute::Admin(AdminPage::AddTour);

        assert_eq!(AppRoute::Tours.access(None), Access::Granted);
        assert_eq!(add_tour.access(None), Access::LoginRequired);
        assert_eq!(add_tour.access(Some(&plain)), Access::Forbidden);
        assert_eq!(add_tour.access(Some(&admin)), Access::Granted);
        assert_eq!(add_tour.access(Some(&user(Role::SuperAdmin))), Access::Granted);

        let booking = AppRoute::Booking("t".to_string());
        assert_eq!(booking.access(None), Access::LoginRequired);
        assert_eq!(booking.access(Some(&plain)), Access::Granted);
        assert_eq!(booking.access(Some(&admin)), Access::Granted);

        let bookings = AppRoute::User(UserPage::Bookings);
        assert_eq!(bookings.access(Some(&admin)), Access::Forbidden);
    }

    #[test]
    fn test_sidebar_items() {
        let admin = sidebar_items(Some(Role::Admin));
        assert_eq!(admin, sidebar_items(Some(Role::SuperAdmin)));
        assert_eq!(admin.len(), 2);
        assert_eq!(admin[1].title, "Tour Management");
        assert_eq!(admin[1].items.len(), 3);

        let user = sidebar_items(Some(Role::User));
        assert_eq!(user[0].items[0].route, AppRoute::User(UserPage::Bookings));

        assert!(sidebar_items(None).is_empty());
    }

    #[test]
    fn test_nav_links() {
        assert_eq!(nav_links(None).len(), 3);

        let admin = nav_links(Some(Role::SuperAdmin));
        assert_eq!(admin.last().map(|l| &l.route), Some(&AppRoute::Admin(AdminPage::Analytics)));

        let user = nav_links(Some(Role::User));
        assert_eq!(user.last().map(|l| &l.route), Some(&AppRoute::User(UserPage::Bookings)));
    }
}
