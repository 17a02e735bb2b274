use crate::core::escape::quote_str;
use crate::core::template::Template;
use crate::core::Storage;
use crate::domain::model::{RegistryModel, ServiceRecord};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::path::Path;

pub const GENERATED_HEADER: &str =
    "// Code generated by `cargo run --bin blocked-services-gen`; DO NOT EDIT.";

const FILE_TEMPLATE: &str = r#"{{header}}

/// A single blocked service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedService {
    pub id: &'static str,
    pub name: &'static str,
    pub icon_svg: &'static [u8],
    pub rules: &'static [&'static str],
}

/// Raw blocked service data, sorted by id.
pub static BLOCKED_SERVICES: &[BlockedService] = &[{{services}}];
"#;

const SERVICE_TEMPLATE: &str = r#"
    BlockedService {
        id: {{id}},
        name: {{name}},
        icon_svg: {{icon_svg}}.as_bytes(),
        rules: &[{{rules}}],
    }"#;

const RULE_INDENT: &str = "            ";
const RULES_CLOSE_INDENT: &str = "        ";

/// Renders a registry model into Rust source.
pub struct CodeEmitter {
    file: Template<'static>,
    service: Template<'static>,
}

impl CodeEmitter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            file: Template::parse("file", FILE_TEMPLATE)?,
            service: Template::parse("service", SERVICE_TEMPLATE)?,
        })
    }

    pub fn render(&self, model: &RegistryModel) -> Result<String> {
        let services = model
            .blocked_services
            .iter()
            .map(|s| self.render_service(s))
            .collect::<Result<Vec<_>>>()?;

        let mut values = HashMap::new();
        values.insert("header", GENERATED_HEADER.to_string());
        values.insert("services", join_items(&services));

        self.file.render(&values)
    }

    fn render_service(&self, service: &ServiceRecord) -> Result<String> {
        let mut values = HashMap::new();
        values.insert("id", quote_str(&service.id));
        values.insert("name", quote_str(&service.name));
        values.insert("icon_svg", quote_str(&service.icon_svg));
        values.insert("rules", render_rules(&service.rules));

        self.service.render(&values)
    }

    /// Renders `model` and replaces the file at `path` with the result.
    pub async fn emit<S: Storage>(
        &self,
        model: &RegistryModel,
        storage: &S,
        path: &Path,
    ) -> Result<()> {
        let source = self.render(model)?;
        tracing::debug!("Rendered {} bytes of generated source", source.len());

        storage.write_file(path, source.as_bytes()).await
    }
}

/// Comma between items, none after the last one. Every item already starts
/// on its own line, so a non-empty list gets a closing newline.
fn join_items(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = items.join(",");
    out.push('\n');
    out
}

/// One rule per line, each terminated by a comma.
fn render_rules(rules: &[String]) -> String {
    if rules.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for rule in rules {
        out.push('\n');
        out.push_str(RULE_INDENT);
        out.push_str(&quote_str(rule));
        out.push(',');
    }
    out.push('\n');
    out.push_str(RULES_CLOSE_INDENT);
    out
}
