use super::{RouteDescriptor, View};

/// Reader Router Module
///
/// The `/reader` subtree: the console shell plus every reader view. Unlike
/// the admin and super subtrees it declares no auth flag; access control for
/// reader data is enforced by the backend, not by the navigation guard.
pub fn reader_routes() -> RouteDescriptor {
    RouteDescriptor::view("/reader", "Reader", View::ReaderConsole).with_children(vec![
        RouteDescriptor::view(
            "rpersonalcenter",
            "Rpersonalcenter",
            View::ReaderPersonalCenter,
        ),
        RouteDescriptor::view("bookborrow", "Bookborrow", View::BookBorrowing),
        RouteDescriptor::view("bookreturn", "Bookreturn", View::BookReturning),
        RouteDescriptor::view("rviolation", "Rviolation", View::ReaderViolations),
        RouteDescriptor::view("topn", "Topn", View::TopBooks),
        RouteDescriptor::view("collect", "Collect", View::Collection),
        // Absolute child path: the detail page is addressed from the root
        // but stays inside the reader console's matched chain.
        RouteDescriptor::view("/books/:bookId", "BookDetail", View::BookDetail),
        RouteDescriptor::view("donate", "Donate", View::Donations),
        RouteDescriptor::view("readernotice", "Readernotice", View::ReaderNotices),
        RouteDescriptor::view("recording", "Recording", View::BorrowHistory),
        RouteDescriptor::view("chat", "ReaderChat", View::ChatAssistant),
    ])
}
