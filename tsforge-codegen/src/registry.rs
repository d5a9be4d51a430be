//! Built-in component types and their template registry.

use std::{fmt, str::FromStr};

use tsforge_config::ContentTemplate;

use crate::error::{Error, Result};

/// Built-in component types with a shipped template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Class,
    Interface,
    Type,
    Variable,
    Function,
    NodeModule,
    NodeServer,
    ExpressController,
    ExpressRoute,
    ExpressServer,
    FastifyController,
    FastifyRoute,
    FastifyServer,
}

impl ComponentType {
    /// All built-in component types, in display order.
    pub const ALL: [ComponentType; 13] = [
        ComponentType::Class,
        ComponentType::Interface,
        ComponentType::Type,
        ComponentType::Variable,
        ComponentType::Function,
        ComponentType::NodeModule,
        ComponentType::NodeServer,
        ComponentType::ExpressController,
        ComponentType::ExpressRoute,
        ComponentType::ExpressServer,
        ComponentType::FastifyController,
        ComponentType::FastifyRoute,
        ComponentType::FastifyServer,
    ];

    /// Returns the component type identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Class => "class",
            ComponentType::Interface => "interface",
            ComponentType::Type => "type",
            ComponentType::Variable => "variable",
            ComponentType::Function => "function",
            ComponentType::NodeModule => "node-module",
            ComponentType::NodeServer => "node-server",
            ComponentType::ExpressController => "express-controller",
            ComponentType::ExpressRoute => "express-route",
            ComponentType::ExpressServer => "express-server",
            ComponentType::FastifyController => "fastify-controller",
            ComponentType::FastifyRoute => "fastify-route",
            ComponentType::FastifyServer => "fastify-server",
        }
    }

    /// Interfaces and type aliases have no runtime value, so their barrel
    /// export must be type-only.
    pub fn is_type_only(&self) -> bool {
        matches!(self, ComponentType::Interface | ComponentType::Type)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown component type '{s}'"))
    }
}

/// Resolve a component type string against the built-in registry.
pub fn resolve(component_type: &str) -> Result<ContentTemplate> {
    let ty = ComponentType::from_str(component_type).map_err(|_| {
        Box::new(Error::TemplateNotFound {
            component_type: component_type.to_string(),
        })
    })?;
    Ok(built_in(ty))
}

/// Resolve a custom template by name over the user-supplied list.
pub fn resolve_custom<'a>(
    name: &str,
    templates: &'a [ContentTemplate],
) -> Result<&'a ContentTemplate> {
    templates.iter().find(|t| t.name == name).ok_or_else(|| {
        Box::new(Error::CustomTemplateNotFound {
            name: name.to_string(),
        })
    })
}

/// The shipped template for a built-in component type.
pub fn built_in(ty: ComponentType) -> ContentTemplate {
    match ty {
        ComponentType::Class => ContentTemplate::new(
            "Class",
            "An exported class",
            "class",
            [
                "export class {{fileNamePascalCase}} {",
                "  constructor() {}",
                "}",
            ],
        ),
        ComponentType::Interface => ContentTemplate::new(
            "Interface",
            "An exported interface",
            "interface",
            ["export interface {{fileNamePascalCase}} {", "  id: string;", "}"],
        ),
        ComponentType::Type => ContentTemplate::new(
            "Type",
            "An exported type alias",
            "type",
            ["export type {{fileNamePascalCase}} = {", "  id: string;", "};"],
        ),
        ComponentType::Variable => ContentTemplate::new(
            "Variable",
            "An exported constant",
            "variable",
            ["export const {{fileNameCamelCase}} = {};"],
        ),
        ComponentType::Function => ContentTemplate::new(
            "Function",
            "An exported function",
            "function",
            [
                "export function {{fileNameCamelCase}}() {",
                "  return;",
                "}",
            ],
        ),
        ComponentType::NodeModule => ContentTemplate::new(
            "Node Module",
            "A module with a default export",
            "module",
            [
                "export const {{fileNameCamelCase}} = {};",
                "",
                "export default {{fileNameCamelCase}};",
            ],
        ),
        ComponentType::NodeServer => ContentTemplate::new(
            "Node Server",
            "A plain node:http server",
            "server",
            [
                "import { createServer } from 'node:http';",
                "",
                "const port = process.env.PORT ?? 3000;",
                "",
                "const server = createServer((req, res) => {",
                "  res.statusCode = 200;",
                "  res.setHeader('Content-Type', 'application/json');",
                "  res.end(JSON.stringify({ name: '{{fileNamePascalCase}}' }));",
                "});",
                "",
                "server.listen(port);",
            ],
        ),
        ComponentType::ExpressController => ContentTemplate::new(
            "Express Controller",
            "An Express controller class",
            "controller",
            [
                "import { Request, Response } from 'express';",
                "",
                "export class {{fileNamePascalCase}}Controller {",
                "  index(req: Request, res: Response) {",
                "    res.json({ resource: '{{fileNamePluralCase}}' });",
                "  }",
                "}",
            ],
        ),
        ComponentType::ExpressRoute => ContentTemplate::new(
            "Express Route",
            "An Express router",
            "route",
            [
                "import { Router } from 'express';",
                "",
                "export const {{fileNameCamelCase}}Router = Router();",
                "",
                "{{fileNameCamelCase}}Router.get('/{{fileNameKebabCase}}', (req, res) => {",
                "  res.json({ resource: '{{fileNamePluralCase}}' });",
                "});",
            ],
        ),
        ComponentType::ExpressServer => ContentTemplate::new(
            "Express Server",
            "An Express application entry point",
            "server",
            [
                "import express from 'express';",
                "",
                "const app = express();",
                "const port = process.env.PORT ?? 3000;",
                "",
                "app.use(express.json());",
                "",
                "app.listen(port);",
                "",
                "export default app;",
            ],
        ),
        ComponentType::FastifyController => ContentTemplate::new(
            "Fastify Controller",
            "A Fastify controller class",
            "controller",
            [
                "import { FastifyReply, FastifyRequest } from 'fastify';",
                "",
                "export class {{fileNamePascalCase}}Controller {",
                "  async index(request: FastifyRequest, reply: FastifyReply) {",
                "    return reply.send({ resource: '{{fileNamePluralCase}}' });",
                "  }",
                "}",
            ],
        ),
        ComponentType::FastifyRoute => ContentTemplate::new(
            "Fastify Route",
            "A Fastify route plugin",
            "route",
            [
                "import { FastifyInstance } from 'fastify';",
                "",
                "export async function {{fileNameCamelCase}}Routes(fastify: FastifyInstance) {",
                "  fastify.get('/{{fileNameKebabCase}}', async () => {",
                "    return { resource: '{{fileNamePluralCase}}' };",
                "  });",
                "}",
            ],
        ),
        ComponentType::FastifyServer => ContentTemplate::new(
            "Fastify Server",
            "A Fastify application entry point",
            "server",
            [
                "import Fastify from 'fastify';",
                "",
                "const fastify = Fastify({ logger: true });",
                "",
                "const start = async () => {",
                "  try {",
                "    await fastify.listen({ port: 3000 });",
                "  } catch (err) {",
                "    fastify.log.error(err);",
                "    process.exit(1);",
                "  }",
                "};",
                "",
                "start();",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::from_str(ty.as_str()).unwrap(), ty);
        }
        assert!(ComponentType::from_str("widget").is_err());
    }

    #[test]
    fn test_resolve_built_in() {
        let template = resolve("class").unwrap();
        assert_eq!(template.kind, "class");
        assert!(!template.template.is_empty());
    }

    #[test]
    fn test_resolve_unknown_type() {
        let err = resolve("widget").unwrap_err();
        assert!(matches!(*err, Error::TemplateNotFound { .. }));
    }

    #[test]
    fn test_every_built_in_has_content() {
        for ty in ComponentType::ALL {
            let template = built_in(ty);
            assert!(!template.template.is_empty(), "{ty} template is empty");
            assert!(!template.kind.is_empty(), "{ty} kind is empty");
        }
    }

    #[test]
    fn test_resolve_custom_by_name() {
        let templates = vec![ContentTemplate::new(
            "React Component",
            "A functional React component",
            "component",
            ["export const {{fileNamePascalCase}} = () => null;"],
        )];

        let found = resolve_custom("React Component", &templates).unwrap();
        assert_eq!(found.kind, "component");

        let err = resolve_custom("Missing", &templates).unwrap_err();
        assert!(matches!(*err, Error::CustomTemplateNotFound { .. }));
    }

    #[test]
    fn test_type_only_components() {
        assert!(ComponentType::Interface.is_type_only());
        assert!(ComponentType::Type.is_type_only());
        assert!(!ComponentType::Class.is_type_only());
    }
}
