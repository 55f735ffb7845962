//! Built-in rules for CMS `config.yml` documents.
//!
//! The table is plain data layered on the engine: backend settings, the
//! collection list, per-collection/file/field required properties, widget
//! checks, and settings that are redundant when hosting on Netlify.

use crate::error::Result;
use crate::models::ConfigPath;
use crate::pattern;
use crate::predicate::{
    all, at_path, both, get, has, has_any, is_non_empty_list, match_path,
    missing_keys, on_node, path_ends_with, prop_eq, Predicate,
};
use crate::rule::{Rule, RuleSet};
use serde_json::{json, Value as Json};

const SUPPORTED_BACKENDS: &[&str] = &["git-gateway", "github", "test-repo"];
const DOMAIN_SETTINGS: &[&str] = &["api_root", "site_domain", "base_url"];
const COLLECTION_PROPS: &[&str] = &["name", "label"];
const FILE_PROPS: &[&str] = &["name", "label", "file", "fields"];
const FIELD_PROPS: &[&str] = &["name", "label", "widget"];

/// The full built-in rule set, in report order.
pub fn builtin() -> Result<RuleSet> {
    RuleSet::new(vec![
        backend_exists(),
        backend_type_supported(),
        validate_github_backend(),
        no_unnecessary_domain_settings(),
        has_at_least_one_collection(),
        collection_has_required_props(),
        collection_is_folder_or_files_collection(),
        file_definition_has_required_props(),
        field_has_required_props(),
        select_widget_has_options(),
    ])
}

fn at_root() -> Predicate {
    at_path(ConfigPath::root())
}

fn at_backend() -> Predicate {
    at_path(crate::config_path!["backend"])
}

fn is_collection() -> Predicate {
    match_path(pattern!["collections", "*"])
}

fn is_file_definition() -> Predicate {
    path_ends_with(pattern!["files", "*"])
}

fn is_field_definition() -> Predicate {
    path_ends_with(pattern!["fields", "*"])
}

/// Strings verbatim, anything else as compact JSON.
fn display(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn backend_exists() -> Rule {
    Rule::error("backendExists")
        .when(at_root())
        .test(has("backend"))
        .failure_text("The config should have backend settings!")
        .success_text("Config has backend settings.")
        .fix(|node, _| {
            let mut fixed = node.as_object().cloned().unwrap_or_default();
            fixed.insert(
                "backend".to_string(),
                json!({"name": "<backend-type>", "repo": "<your-username/your-repo>"}),
            );
            Json::Object(fixed)
        })
}

fn backend_type_supported() -> Rule {
    Rule::error("backendTypeSupported")
        .when(at_backend())
        .test(on_node(|node| {
            get(node, "name")
                .and_then(Json::as_str)
                .is_some_and(|name| SUPPORTED_BACKENDS.contains(&name))
        }))
        .failure(|node, _| match get(node, "name") {
            Some(name) => format!("\"{}\" is not a supported backend!", display(name)),
            None => "The backend has no \"name\" setting!".to_string(),
        })
        .success(|node, _| {
            let name = get(node, "name").map(display).unwrap_or_default();
            format!("\"{}\" is a supported backend.", name)
        })
}

fn validate_github_backend() -> Rule {
    Rule::error("validateGithubBackend")
        .when(all(vec![
            at_backend(),
            has("name"),
            prop_eq("name", json!("github")),
        ]))
        .test(on_node(|node| {
            get(node, "repo")
                .and_then(Json::as_str)
                .is_some_and(|repo| repo.split('/').count() == 2)
        }))
        .failure(|node, _| match get(node, "repo") {
            Some(repo) => format!("\"{}\" is not a valid repo name.", display(repo)),
            None => "The GitHub backend requires a \"repo\" setting.".to_string(),
        })
        .success(|node, _| {
            let repo = get(node, "repo").map(display).unwrap_or_default();
            format!(
                "Repo name is present, and \"{}\" is a valid repo name.",
                repo
            )
        })
}

fn points_at_netlify(value: &Json) -> bool {
    value.as_str().is_some_and(|s| s.contains("netlify.com"))
}

fn no_unnecessary_domain_settings() -> Rule {
    Rule::warning("noUnnecessaryDomainSettings")
        .when(both(at_backend(), has_any(DOMAIN_SETTINGS)))
        .test(on_node(|node| {
            DOMAIN_SETTINGS
                .iter()
                .filter_map(|key| get(node, key))
                .all(|value| !points_at_netlify(value))
        }))
        .failure_text(
            "You don't need to set \"api_root\", \"site_domain\", or \"base_url\" if you're hosting on Netlify.",
        )
        .success_text("No unnecessary domain settings set.")
}

fn has_at_least_one_collection() -> Rule {
    Rule::error("hasAtLeastOneCollection")
        .when(at_root())
        .test(on_node(|node| is_non_empty_list(get(node, "collections"))))
        .failure_text("There are no \"collections\" defined!")
        .success_text("There is at least one collection defined.")
}

fn collection_has_required_props() -> Rule {
    Rule::error("collectionHasRequiredProps")
        .when(is_collection())
        .test(on_node(|node| missing_keys(node, COLLECTION_PROPS).is_empty()))
        .failure(|node, _| {
            format!(
                "Collection is missing required settings: {}!",
                missing_keys(node, COLLECTION_PROPS).join(", ")
            )
        })
        .success(|_, _| {
            format!(
                "Collection has required settings: {}.",
                COLLECTION_PROPS.join(", ")
            )
        })
}

/// Classify a collection as folder- or files-based, or explain why it is
/// neither.
fn collection_shape(node: &Json) -> std::result::Result<&'static str, &'static str> {
    match (get(node, "folder"), get(node, "files")) {
        (None, None) => Err("Collection has no \"files\" or \"folder\" setting!"),
        (Some(_), Some(_)) => Err("Collection should only have one of \"files\" or \"folder\" set."),
        (None, Some(files)) => match files.as_array() {
            Some(list) if !list.is_empty() => Ok("Collection is a files-based collection."),
            Some(_) => Err("Collection has an empty \"files\" list!"),
            None => Err("Collection \"files\" setting must be a list!"),
        },
        (Some(_), None) => {
            if is_non_empty_list(get(node, "fields")) {
                Ok("Collection is a folder-based collection.")
            } else {
                Err("Collection has a \"folder\" setting but no \"fields\" array!")
            }
        }
    }
}

fn collection_is_folder_or_files_collection() -> Rule {
    Rule::error("collectionIsFolderOrFilesCollection")
        .when(is_collection())
        .test(on_node(|node| collection_shape(node).is_ok()))
        .failure(|node, _| collection_shape(node).err().unwrap_or_default().to_string())
        .success(|node, _| collection_shape(node).unwrap_or_default().to_string())
}

fn file_definition_has_required_props() -> Rule {
    Rule::error("fileDefinitionHasRequiredProps")
        .when(is_file_definition())
        .test(on_node(|node| missing_keys(node, FILE_PROPS).is_empty()))
        .failure(|node, _| {
            format!(
                "File definition is missing required props: {}",
                missing_keys(node, FILE_PROPS).join(", ")
            )
        })
        .success(|_, _| format!("File definition has required props: {}", FILE_PROPS.join(", ")))
}

fn field_has_required_props() -> Rule {
    Rule::error("fieldHasRequiredProps")
        .when(is_field_definition())
        .test(on_node(|node| missing_keys(node, FIELD_PROPS).is_empty()))
        .failure(|node, _| {
            format!(
                "Field is missing required props: {}",
                missing_keys(node, FIELD_PROPS).join(", ")
            )
        })
        .success(|_, _| format!("Field has required props: {}", FIELD_PROPS.join(", ")))
}

fn select_widget_has_options() -> Rule {
    Rule::error("selectWidgetHasOptions")
        .when(both(
            is_field_definition(),
            prop_eq("widget", json!("select")),
        ))
        .test(on_node(|node| get(node, "options").is_some_and(Json::is_array)))
        .failure_text("\"select\" widget does not have an \"options\" array!")
        .success_text("\"select\" widget has an \"options\" array.")
}
