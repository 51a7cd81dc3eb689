/// Router Module Index
///
/// Organizes the route surface into role-segregated modules. The three role
/// subtrees map directly to the application consoles; the public module
/// holds the entry, login, and landing routes reachable without a session.

/// Routes reachable without a session (entry, login, landing pages).
pub mod public;

/// The `/admin` subtree. Declares `requires_auth` at its root.
pub mod admin;

/// The `/reader` subtree. Carries no auth flag of its own.
pub mod reader;

/// The `/super` subtree. Declares `requires_auth` at its root.
pub mod super_admin;

/// Route name the navigation guard exempts from the session check.
pub const LOGIN_ROUTE_NAME: &str = "Login";

/// View
///
/// Identifies the view component a route renders. Rendering itself is out of
/// scope for this layer; the enum is the component reference the application
/// shell instantiates on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    // Entry and landing pages.
    Login,
    FaceLogin,
    FaceBind,
    AdminFront,
    ReaderFront,
    // Console shells, one per role subtree.
    AdminConsole,
    ReaderConsole,
    SuperConsole,
    // Admin console views.
    Statistics,
    KnowledgeGraph,
    Reviews,
    Books,
    Borrows,
    Returns,
    ReaderRoster,
    AdminViolations,
    AdminNotices,
    AdminPersonalCenter,
    KnowledgeBase,
    ChatAssistant,
    // Reader console views.
    ReaderPersonalCenter,
    BookBorrowing,
    BookReturning,
    ReaderViolations,
    TopBooks,
    Collection,
    BookDetail,
    Donations,
    ReaderNotices,
    BorrowHistory,
    // Super admin console views.
    SuperDashboard,
    AdminAccounts,
    SuperNotices,
    SuperPersonalCenter,
}

/// RouteDescriptor
///
/// One declarative entry of the route table: a path (relative to its parent
/// unless it starts with `/`), an optional stable name, the view it renders
/// or a redirect target, an auth flag, and nested children. Immutable after
/// declaration; the full set forms the route tree compiled by [`RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: Option<View>,
    pub redirect: Option<&'static str>,
    pub requires_auth: bool,
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    /// A route rendering a named view.
    pub fn view(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name: Some(name),
            view: Some(view),
            redirect: None,
            requires_auth: false,
            children: Vec::new(),
        }
    }

    /// A pure redirect entry (no view of its own).
    pub fn redirect(path: &'static str, target: &'static str) -> Self {
        Self {
            path,
            name: None,
            view: None,
            redirect: Some(target),
            requires_auth: false,
            children: Vec::new(),
        }
    }

    /// Marks this route (and therefore its whole subtree) as requiring a session.
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Attaches nested child routes.
    pub fn with_children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }
}

// A compiled path segment. A `:param` segment matches any single non-empty
// segment; everything else must match literally. The parameter's name stays
// visible in `full_path`; nothing in this layer extracts its value.
#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param,
}

/// CompiledRoute
///
/// A matchable entry produced from the declarative tree: the absolute path,
/// the route's own metadata, the matched chain of ancestor paths (root
/// first, self last), and the effective auth flag ORed over that chain.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    pub full_path: String,
    pub name: Option<&'static str>,
    pub view: Option<View>,
    pub redirect: Option<&'static str>,
    /// True when this route or any ancestor in its chain declares the flag.
    pub requires_auth: bool,
    /// Absolute paths of the matched chain, root first.
    pub chain: Vec<String>,
    segments: Vec<Segment>,
}

impl CompiledRoute {
    fn matches(&self, parts: &[&str]) -> bool {
        self.segments.len() == parts.len()
            && self
                .segments
                .iter()
                .zip(parts)
                .all(|(segment, part)| match segment {
                    Segment::Literal(literal) => literal == part,
                    Segment::Param => !part.is_empty(),
                })
    }

    fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Literal(_)))
            .count()
    }
}

/// RouteTable
///
/// The compiled route surface of the application. Built once at startup from
/// the role-segregated modules and consulted on every navigation.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<CompiledRoute>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// new
    ///
    /// Assembles the application's entire route surface: the public entries
    /// plus the three role subtrees.
    pub fn new() -> Self {
        let mut descriptors = public::public_routes();
        descriptors.push(admin::admin_routes());
        descriptors.push(reader::reader_routes());
        descriptors.push(super_admin::super_admin_routes());
        Self::compile(&descriptors)
    }

    /// compile
    ///
    /// Flattens a declarative tree into matchable entries. Child paths are
    /// resolved against the parent path; an absolute child path anchors at
    /// the root but keeps its ancestor chain; an empty child path aliases
    /// the parent path (the subtree's index route).
    pub fn compile(descriptors: &[RouteDescriptor]) -> Self {
        let mut entries = Vec::new();
        for descriptor in descriptors {
            flatten(descriptor, "", &[], false, &mut entries);
        }
        Self { entries }
    }

    /// resolve
    ///
    /// Matches a concrete path against the table. When several entries match
    /// (a parameterized route alongside a literal one, or a subtree index
    /// aliasing its parent), the entry with the most literal segments wins,
    /// then the one with the deepest matched chain.
    pub fn resolve(&self, path: &str) -> Option<&CompiledRoute> {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();

        self.entries
            .iter()
            .filter(|entry| entry.matches(&parts))
            .max_by_key(|entry| (entry.literal_count(), entry.chain.len()))
    }

    /// Every compiled entry, in declaration order. Used for startup reporting.
    pub fn entries(&self) -> &[CompiledRoute] {
        &self.entries
    }
}

fn flatten(
    descriptor: &RouteDescriptor,
    parent_path: &str,
    parent_chain: &[String],
    parent_auth: bool,
    entries: &mut Vec<CompiledRoute>,
) {
    let full_path = if descriptor.path.starts_with('/') {
        descriptor.path.to_string()
    } else if descriptor.path.is_empty() {
        parent_path.to_string()
    } else {
        format!("{}/{}", parent_path.trim_end_matches('/'), descriptor.path)
    };

    let mut chain = parent_chain.to_vec();
    chain.push(full_path.clone());

    let requires_auth = parent_auth || descriptor.requires_auth;

    let segments = full_path
        .split('/')
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part.starts_with(':') {
                Segment::Param
            } else {
                Segment::Literal(part.to_string())
            }
        })
        .collect();

    entries.push(CompiledRoute {
        full_path: full_path.clone(),
        name: descriptor.name,
        view: descriptor.view,
        redirect: descriptor.redirect,
        requires_auth,
        chain: chain.clone(),
        segments,
    });

    for child in &descriptor.children {
        flatten(child, &full_path, &chain, requires_auth, entries);
    }
}
