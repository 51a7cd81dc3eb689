use serde::Deserialize;
use serde_json::Value;

use crate::session::{SessionStore, USER_KEY};

/// Name of the request header carrying the resolved role tag.
pub const ROLE_HEADER: &str = "X-Role";

/// Role
///
/// The derived authorization category attached to outgoing requests.
/// Derived from the stored identity blob on every request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Super,
}

impl Role {
    /// The wire value carried in the role header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Super => "super",
        }
    }
}

/// RoleResolution
///
/// The outcome of resolving the stored identity blob into a role tag.
/// The malformed case is kept distinct from the anonymous case so tests can
/// assert on the failure path; callers on the request path collapse both to
/// "no role" via [`RoleResolution::role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleResolution {
    /// The blob parsed and carried a role indicator.
    Resolved(Role),
    /// No blob stored, or a blob with no role indicators.
    Anonymous,
    /// The blob exists but is not valid JSON. The reason is retained for
    /// diagnostics only; it never escapes to the request path.
    Malformed(String),
}

impl RoleResolution {
    /// Collapses the resolution to an optional role. This is the degraded
    /// view used by the request interceptor, where every failure must be
    /// indistinguishable from "no role present".
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleResolution::Resolved(role) => Some(*role),
            _ => None,
        }
    }
}

/// IdentityBlob
///
/// The role-bearing fields of the stored identity record. The blob is
/// externally defined and carries far more than this; every other field is
/// ignored, and the indicator fields keep their raw JSON shape because the
/// login flow writes them as strings, numbers, or nothing at all.
#[derive(Debug, Default, Deserialize)]
struct IdentityBlob {
    #[serde(rename = "superId")]
    super_id: Option<Value>,
    #[serde(rename = "superName")]
    super_name: Option<Value>,
    #[serde(rename = "adminName")]
    admin_name: Option<Value>,
    #[serde(rename = "adminLoginName")]
    admin_login_name: Option<Value>,
}

impl IdentityBlob {
    fn is_super(&self) -> bool {
        truthy_indicator(&self.super_id) || truthy_indicator(&self.super_name)
    }

    fn is_admin(&self) -> bool {
        truthy_indicator(&self.admin_name) || truthy_indicator(&self.admin_login_name)
    }
}

/// resolve_role
///
/// Maps the identity blob stored under the `user` key to a role tag.
/// Pure read with no side effects; every error degrades to a non-role
/// outcome and nothing escapes past this boundary.
///
/// Super takes precedence over admin when both indicator sets are present.
/// The precedence is deliberate and load-bearing: the super console reuses
/// admin fields in some historical blobs.
pub fn resolve_role(session: &dyn SessionStore) -> RoleResolution {
    let raw = match session.get(USER_KEY) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return RoleResolution::Anonymous,
    };

    let parsed: Value = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(err) => return RoleResolution::Malformed(err.to_string()),
    };

    // The text parsed, so it is not malformed; a non-object blob simply has
    // no indicator fields to consult and degrades to anonymous.
    let blob: IdentityBlob = serde_json::from_value(parsed).unwrap_or_default();

    if blob.is_super() {
        RoleResolution::Resolved(Role::Super)
    } else if blob.is_admin() {
        RoleResolution::Resolved(Role::Admin)
    } else {
        RoleResolution::Anonymous
    }
}

// Presence of a role indicator follows the loose truthiness of the stored
// blobs: null, false, zero, and the empty string all mean "not set".
// An absent field and a JSON null both deserialize to `None`.
fn truthy_indicator(value: &Option<Value>) -> bool {
    value.as_ref().is_some_and(truthy)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
