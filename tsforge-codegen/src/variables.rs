//! The variable map handed to templates during rendering.
//!
//! The key set is a fixed contract: templates reference these names, so
//! adding or removing a key is a breaking change. Spellings (including
//! `Extention`) are part of that contract and must not be corrected.

use chrono::{Datelike, Local, SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use tsforge_config::ProjectConfig;
use tsforge_core::{
    pluralize, singularize, to_camel_case, to_constant_case, to_dot_case, to_kebab_case,
    to_pascal_case, to_path_case, to_sentence_case, to_snake_case, to_title_case,
};

/// Build the full variable map for one render.
///
/// Every key is always populated, whether or not the template references it.
pub fn build_variables(
    folder_name: &str,
    component_name: &str,
    file_type: &str,
    file_extension: &str,
    project: &ProjectConfig,
) -> Map<String, Value> {
    let now_utc = Utc::now();
    let now_local = Local::now();

    let mut vars = Map::new();
    let mut set = |key: &str, value: Value| {
        vars.insert(key.to_string(), value);
    };

    set("fileName", json!(component_name));
    set("fileNameCamelCase", json!(to_camel_case(component_name)));
    set("fileNamePascalCase", json!(to_pascal_case(component_name)));
    set("fileNameKebabCase", json!(to_kebab_case(component_name)));
    set("fileNameSnakeCase", json!(to_snake_case(component_name)));
    set(
        "fileNameConstantCase",
        json!(to_constant_case(component_name)),
    );
    set("fileNameDotCase", json!(to_dot_case(component_name)));
    set("fileNamePathCase", json!(to_path_case(component_name)));
    set(
        "fileNameSentenceCase",
        json!(to_sentence_case(component_name)),
    );
    set("fileNameLowerCase", json!(component_name.to_lowercase()));
    set("fileNameTitleCase", json!(to_title_case(component_name)));
    set("fileNamePluralCase", json!(pluralize(component_name)));
    set("fileNameSingularCase", json!(singularize(component_name)));
    set(
        "fileNameWithTypeAndExtention",
        json!(format!("{component_name}.{file_type}.{file_extension}")),
    );
    set(
        "fileNameWithType",
        json!(format!("{component_name}.{file_type}")),
    );
    set(
        "fileNameWithExtention",
        json!(format!("{component_name}.{file_extension}")),
    );
    set("folderName", json!(folder_name));

    set("fileType", json!(file_type));
    set("fileTypeName", json!(to_title_case(file_type)));
    set("fileTypeNameCamelCase", json!(to_camel_case(file_type)));
    set("fileTypeNamePascalCase", json!(to_pascal_case(file_type)));
    set("fileTypeNameKebabCase", json!(to_kebab_case(file_type)));
    set("fileTypeNameSnakeCase", json!(to_snake_case(file_type)));
    set("fileTypeNameConstantCase", json!(to_constant_case(file_type)));
    set("fileTypeNameDotCase", json!(to_dot_case(file_type)));
    set("fileTypeNamePathCase", json!(to_path_case(file_type)));
    set("fileTypeNameSentenceCase", json!(to_sentence_case(file_type)));
    set("fileTypeNameLowerCase", json!(file_type.to_lowercase()));
    set("fileTypeNameUpperCase", json!(file_type.to_uppercase()));
    set("fileTypeNamePlural", json!(pluralize(file_type)));
    set("fileTypeNameSingular", json!(singularize(file_type)));
    set(
        "fileTypeWithExtention",
        json!(format!("{file_type}.{file_extension}")),
    );
    set("fileExtension", json!(file_extension));

    set("date", json!(now_utc.format("%Y-%m-%d").to_string()));
    set("year", json!(now_local.year()));
    set("time", json!(now_local.format("%H:%M:%S").to_string()));
    set("timestamp", json!(now_utc.timestamp_millis()));
    set(
        "timestampISO",
        json!(now_utc.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    set(
        "timestampUTC",
        json!(now_utc.format("%a, %d %b %Y %H:%M:%S GMT").to_string()),
    );
    set(
        "timestampLocale",
        json!(now_local.format("%Y-%m-%d %H:%M:%S").to_string()),
    );
    set(
        "timestampDate",
        json!(now_local.format("%a %b %d %Y").to_string()),
    );
    set(
        "timestampTime",
        json!(now_local.format("%H:%M:%S").to_string()),
    );
    set(
        "timestampLocaleDate",
        json!(now_local.format("%Y-%m-%d").to_string()),
    );

    set("author", json!(project.author));
    set("owner", json!(project.owner));
    set("maintainers", json!(project.maintainers));
    set("license", json!(project.license));
    set("version", json!(project.version));

    vars
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_KEYS: [&str; 48] = [
        "fileName",
        "fileNameCamelCase",
        "fileNamePascalCase",
        "fileNameKebabCase",
        "fileNameSnakeCase",
        "fileNameConstantCase",
        "fileNameDotCase",
        "fileNamePathCase",
        "fileNameSentenceCase",
        "fileNameLowerCase",
        "fileNameTitleCase",
        "fileNamePluralCase",
        "fileNameSingularCase",
        "fileNameWithTypeAndExtention",
        "fileNameWithType",
        "fileNameWithExtention",
        "folderName",
        "fileType",
        "fileTypeName",
        "fileTypeNameCamelCase",
        "fileTypeNamePascalCase",
        "fileTypeNameKebabCase",
        "fileTypeNameSnakeCase",
        "fileTypeNameConstantCase",
        "fileTypeNameDotCase",
        "fileTypeNamePathCase",
        "fileTypeNameSentenceCase",
        "fileTypeNameLowerCase",
        "fileTypeNameUpperCase",
        "fileTypeNamePlural",
        "fileTypeNameSingular",
        "fileTypeWithExtention",
        "fileExtension",
        "date",
        "year",
        "time",
        "timestamp",
        "timestampISO",
        "timestampUTC",
        "timestampLocale",
        "timestampDate",
        "timestampTime",
        "timestampLocaleDate",
        "author",
        "owner",
        "maintainers",
        "license",
        "version",
    ];

    #[test]
    fn test_key_set_is_stable() {
        let vars = build_variables("models", "user", "service", "ts", &ProjectConfig::default());

        assert_eq!(vars.len(), EXPECTED_KEYS.len());
        for key in EXPECTED_KEYS {
            assert!(vars.contains_key(key), "missing key '{key}'");
        }
    }

    #[test]
    fn test_name_variants() {
        let vars = build_variables(
            "models",
            "user profile",
            "service",
            "ts",
            &ProjectConfig::default(),
        );

        assert_eq!(vars["fileNameCamelCase"], "userProfile");
        assert_eq!(vars["fileNamePascalCase"], "UserProfile");
        assert_eq!(vars["fileNameKebabCase"], "user-profile");
        assert_eq!(vars["fileNameSnakeCase"], "user_profile");
        assert_eq!(vars["fileNameConstantCase"], "USER_PROFILE");
        assert_eq!(vars["fileNameDotCase"], "user.profile");
        assert_eq!(vars["fileNamePathCase"], "user/profile");
        assert_eq!(vars["fileNameTitleCase"], "User Profile");
        assert_eq!(vars["fileNamePluralCase"], "user profiles");
        assert_eq!(vars["fileNameWithTypeAndExtention"], "user profile.service.ts");
        assert_eq!(vars["folderName"], "models");
    }

    #[test]
    fn test_project_passthrough() {
        let project = ProjectConfig {
            author: "Jane Doe".to_string(),
            license: "MIT".to_string(),
            ..ProjectConfig::default()
        };

        let vars = build_variables("models", "user", "service", "ts", &project);

        assert_eq!(vars["author"], "Jane Doe");
        assert_eq!(vars["license"], "MIT");
        assert_eq!(vars["owner"], "");
    }
}
