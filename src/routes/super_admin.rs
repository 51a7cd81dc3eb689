use super::{RouteDescriptor, View};

/// Super Admin Router Module
///
/// The `/super` subtree: the console shell, its index view (the empty child
/// path aliases `/super` itself), and the super-admin views. Declares
/// `requires_auth` at the subtree root.
pub fn super_admin_routes() -> RouteDescriptor {
    RouteDescriptor::view("/super", "Super", View::SuperConsole)
        .requires_auth()
        .with_children(vec![
            RouteDescriptor::view("", "FrontIndex", View::SuperDashboard),
            RouteDescriptor::view("superadmin", "Superadmin", View::AdminAccounts),
            RouteDescriptor::view("notice", "Notice", View::SuperNotices),
            RouteDescriptor::view("knowledge", "SuperKnowledge", View::KnowledgeBase),
            RouteDescriptor::view("datas", "SuperDatas", View::Statistics),
            // "Sersonalcenter" is the name this route has always published;
            // renaming it would break deep links held by the consoles.
            RouteDescriptor::view(
                "spersonalcenter",
                "Sersonalcenter",
                View::SuperPersonalCenter,
            ),
            RouteDescriptor::view("chat", "SuperChat", View::ChatAssistant),
        ])
}
