mod support;

use pesobook_client::commands::category::{self, CategoryOptions};
use serde_json::json;
use support::testkit::{StubTransport, configured_home};

#[test]
fn list_returns_both_scopes_sorted() {
    let home = configured_home("pesobook-cat-list");
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        let mut stub = StubTransport::new(Vec::new());
        stub.categories = json!({
            "income": ["Salary", "Bonus"],
            "expense": ["Transport", "Food", "Rent"],
        });

        let envelope = category::list_with_options(CategoryOptions {
            home_override: Some(&home),
            transport: Some(&stub),
        });
        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            assert_eq!(envelope.command, "category list");
            assert_eq!(envelope.data["income"], json!(["Bonus", "Salary"]));
            assert_eq!(
                envelope.data["expense"],
                json!(["Food", "Rent", "Transport"])
            );
        }
    }
}

#[test]
fn add_posts_lowercase_scope_key() {
    let home = configured_home("pesobook-cat-add");
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        let stub = StubTransport::new(Vec::new());
        let envelope = category::add_with_options(
            "Utilities",
            "Expense",
            CategoryOptions {
                home_override: Some(&home),
                transport: Some(&stub),
            },
        );
        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            assert_eq!(envelope.data["message"], "Category added.");
            assert_eq!(envelope.data["type"], "expense");
        }

        let posts = stub.recorded_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["action"], "addCategory");
        assert_eq!(posts[0]["payload"]["category"], "Utilities");
        assert_eq!(posts[0]["payload"]["type"], "expense");
    }
}

#[test]
fn add_rejects_empty_names_before_any_network_traffic() {
    let home = configured_home("pesobook-cat-add-empty");
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        let stub = StubTransport::new(Vec::new());
        let result = category::add_with_options(
            "   ",
            "expense",
            CategoryOptions {
                home_override: Some(&home),
                transport: Some(&stub),
            },
        );
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
        }
        assert!(stub.recorded_posts().is_empty());
    }
}

#[test]
fn add_rejects_unknown_scopes() {
    let home = configured_home("pesobook-cat-add-scope");
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        let stub = StubTransport::new(Vec::new());
        let result = category::add_with_options(
            "Utilities",
            "savings",
            CategoryOptions {
                home_override: Some(&home),
                transport: Some(&stub),
            },
        );
        assert!(result.is_err());
        assert!(stub.recorded_posts().is_empty());
    }
}

#[test]
fn remove_posts_name_only_payload() {
    let home = configured_home("pesobook-cat-remove");
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        let stub = StubTransport::new(Vec::new());
        let envelope = category::remove_with_options(
            "Food",
            CategoryOptions {
                home_override: Some(&home),
                transport: Some(&stub),
            },
        );
        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            assert_eq!(envelope.data["message"], "Category removed.");
            assert!(envelope.data.get("type").is_none());
        }

        let posts = stub.recorded_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["action"], "removeCategory");
        assert_eq!(posts[0]["payload"], json!({"category": "Food"}));
    }
}

#[test]
fn remove_surfaces_the_sheets_own_error_for_unknown_names() {
    let home = configured_home("pesobook-cat-remove-unknown");
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        let stub = StubTransport::new(Vec::new()).with_post_error("Category not found.");
        let result = category::remove_with_options(
            "Ghost",
            CategoryOptions {
                home_override: Some(&home),
                transport: Some(&stub),
            },
        );
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "endpoint_rejected");
            assert!(error.message.contains("Category not found."));
        }
    }
}
