use super::{RouteDescriptor, View};

/// Admin Router Module
///
/// The `/admin` subtree: the console shell plus every admin view. The
/// `requires_auth` flag is declared once at the subtree root and applies to
/// every child through the matched chain. Route names keep their historical
/// spellings; they are part of the published route surface.
pub fn admin_routes() -> RouteDescriptor {
    RouteDescriptor::view("/admin", "Admin", View::AdminConsole)
        .requires_auth()
        .with_children(vec![
            RouteDescriptor::view("datas", "Datas", View::Statistics),
            RouteDescriptor::view("graph", "KnowledgeGraph", View::KnowledgeGraph),
            RouteDescriptor::view("reviews", "Reviews", View::Reviews),
            // Book management lives one level deeper than the other views.
            RouteDescriptor::view("books/book", "Books", View::Books),
            RouteDescriptor::view("books/borrow", "Borrows", View::Borrows),
            RouteDescriptor::view("books/return", "Returns", View::Returns),
            RouteDescriptor::view("readers", "Readers", View::ReaderRoster),
            RouteDescriptor::view("aviolations", "Aviolations", View::AdminViolations),
            RouteDescriptor::view("notices", "Notices", View::AdminNotices),
            RouteDescriptor::view(
                "apersonalcenters",
                "Apersonalcenters",
                View::AdminPersonalCenter,
            ),
            RouteDescriptor::view("knowledge", "Knowledge", View::KnowledgeBase),
            RouteDescriptor::view("chat", "Chat", View::ChatAssistant),
        ])
}
