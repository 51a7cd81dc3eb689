use super::{LOGIN_ROUTE_NAME, RouteDescriptor, View};

/// Public Router Module
///
/// Entry, login, and landing routes reachable without a session. The root
/// path is a pure redirect onto the login page; the guard's redirect target
/// therefore always lands on an allowed route.
pub fn public_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::redirect("/", "/login"),
        RouteDescriptor::view("/login", LOGIN_ROUTE_NAME, View::Login),
        // Face recognition login and the one-time camera enrollment flow.
        RouteDescriptor::view("/face-login", "FaceLogin", View::FaceLogin),
        RouteDescriptor::view("/face-bind", "FaceBind", View::FaceBind),
        // Post-login landing pages, one per principal kind. Names are part
        // of the published route surface and keep their historical spellings.
        RouteDescriptor::view("/adminfront", "Adminfront", View::AdminFront),
        RouteDescriptor::view("/readerfront", "Readerfront", View::ReaderFront),
    ]
}
