use bms_portal::auth::{Role, RoleResolution, resolve_role};
use bms_portal::session::{MemorySessionStore, USER_KEY};

// --- Test Utilities ---

fn store_with_user(blob: &str) -> MemorySessionStore {
    let store = MemorySessionStore::new();
    store.insert(USER_KEY, blob);
    store
}

// --- Tests ---

#[test]
fn super_id_alone_resolves_super() {
    let store = store_with_user(r#"{"superId": 7}"#);
    assert_eq!(
        resolve_role(&store),
        RoleResolution::Resolved(Role::Super)
    );
}

#[test]
fn super_name_alone_resolves_super() {
    let store = store_with_user(r#"{"superName": "root"}"#);
    assert_eq!(
        resolve_role(&store),
        RoleResolution::Resolved(Role::Super)
    );
}

#[test]
fn admin_name_alone_resolves_admin() {
    let store = store_with_user(r#"{"adminName": "alice"}"#);
    assert_eq!(
        resolve_role(&store),
        RoleResolution::Resolved(Role::Admin)
    );
}

#[test]
fn admin_login_name_alone_resolves_admin() {
    let store = store_with_user(r#"{"adminLoginName": "alice01"}"#);
    assert_eq!(
        resolve_role(&store),
        RoleResolution::Resolved(Role::Admin)
    );
}

#[test]
fn super_takes_precedence_over_admin() {
    // Both indicator sets present: super wins, checked first.
    let store = store_with_user(r#"{"superId": 1, "adminName": "alice"}"#);
    assert_eq!(
        resolve_role(&store),
        RoleResolution::Resolved(Role::Super)
    );
}

#[test]
fn malformed_blob_is_distinguishable_and_degrades_to_no_role() {
    let store = store_with_user("{not json");
    let resolution = resolve_role(&store);

    // The failure path is observable on its own...
    assert!(matches!(resolution, RoleResolution::Malformed(_)));
    // ...but collapses to "no role" for the request path.
    assert_eq!(resolution.role(), None);
}

#[test]
fn missing_blob_resolves_anonymous() {
    let store = MemorySessionStore::new();
    assert_eq!(resolve_role(&store), RoleResolution::Anonymous);
}

#[test]
fn empty_blob_resolves_anonymous() {
    let store = store_with_user("");
    assert_eq!(resolve_role(&store), RoleResolution::Anonymous);
}

#[test]
fn blob_without_role_indicators_resolves_anonymous() {
    let store = store_with_user(r#"{"readerId": 12, "readerName": "bob"}"#);
    assert_eq!(resolve_role(&store), RoleResolution::Anonymous);
}

#[test]
fn non_object_json_resolves_anonymous() {
    // Valid JSON, but no fields to consult. Parsing succeeded, so this is
    // not the malformed path.
    let store = store_with_user("42");
    assert_eq!(resolve_role(&store), RoleResolution::Anonymous);
}

#[test]
fn falsy_indicator_values_do_not_count_as_presence() {
    // Empty strings, zero, null, and false all mean "not set" in the blobs
    // the login flow writes.
    let store = store_with_user(
        r#"{"superId": 0, "superName": "", "adminName": null, "adminLoginName": false}"#,
    );
    assert_eq!(resolve_role(&store), RoleResolution::Anonymous);
}

#[test]
fn unrelated_blob_fields_are_ignored() {
    // Real blobs carry the whole login payload; only the four indicator
    // fields may influence the resolution.
    let store = store_with_user(
        r#"{"adminName": "alice", "adminId": 3, "token": "abc", "permissions": ["books"]}"#,
    );
    assert_eq!(
        resolve_role(&store),
        RoleResolution::Resolved(Role::Admin)
    );
}

#[test]
fn zero_super_id_with_admin_name_resolves_admin() {
    // A falsy super indicator must not shadow a real admin indicator.
    let store = store_with_user(r#"{"superId": 0, "adminName": "alice"}"#);
    assert_eq!(
        resolve_role(&store),
        RoleResolution::Resolved(Role::Admin)
    );
}
