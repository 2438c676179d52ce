//! Static breaking-change rules, scoped to (source, target) framework pairs.
//!
//! A pair with no entry produces no breaking changes; that is an ordinary
//! outcome, not an error. Automatable rules carry a search pattern and a
//! replacement usable by downstream codemod script generators.

use crate::core::{ChangeSeverity, EffortLevel};

#[derive(Debug, Clone, Copy)]
pub struct BreakingChangeRule {
    pub id: &'static str,
    pub source: &'static str,
    pub target: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub severity: ChangeSeverity,
    pub effort: EffortLevel,
    pub automatable: bool,
    pub search_pattern: Option<&'static str>,
    pub replacement: Option<&'static str>,
    pub migration_guide: Option<&'static str>,
}

pub const BREAKING_CHANGE_RULES: &[BreakingChangeRule] = &[
    // react -> vue
    BreakingChangeRule {
        id: "react-vue-components",
        source: "react",
        target: "vue",
        description: "JSX components must be rewritten as Vue single-file components",
        category: "components",
        severity: ChangeSeverity::Critical,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: Some("https://vuejs.org/guide/extras/composition-api-faq.html"),
    },
    BreakingChangeRule {
        id: "react-vue-hooks",
        source: "react",
        target: "vue",
        description: "React hooks map to composition API primitives (useState -> ref, useEffect -> watchEffect)",
        category: "state",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: Some("https://vuejs.org/guide/reusability/composables.html"),
    },
    BreakingChangeRule {
        id: "react-vue-class-attr",
        source: "react",
        target: "vue",
        description: "className attributes become class in Vue templates",
        category: "templates",
        severity: ChangeSeverity::Low,
        effort: EffortLevel::Trivial,
        automatable: true,
        search_pattern: Some(r"className="),
        replacement: Some("class="),
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "react-vue-events",
        source: "react",
        target: "vue",
        description: "Camel-cased event props (onClick) become v-on directives (@click)",
        category: "templates",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Small,
        automatable: true,
        search_pattern: Some(r"onClick="),
        replacement: Some("@click="),
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "react-vue-context",
        source: "react",
        target: "vue",
        description: "React context consumers move to provide/inject or a pinia store",
        category: "state",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    // vue -> react
    BreakingChangeRule {
        id: "vue-react-sfc",
        source: "vue",
        target: "react",
        description: "Single-file components must be rewritten as JSX function components",
        category: "components",
        severity: ChangeSeverity::Critical,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "vue-react-directives",
        source: "vue",
        target: "react",
        description: "Template directives (v-if, v-for) become JSX expressions",
        category: "templates",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "vue-react-vmodel",
        source: "vue",
        target: "react",
        description: "v-model two-way bindings become controlled components",
        category: "forms",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "vue-react-class-attr",
        source: "vue",
        target: "react",
        description: "class attributes become className in JSX",
        category: "templates",
        severity: ChangeSeverity::Low,
        effort: EffortLevel::Trivial,
        automatable: true,
        search_pattern: Some(r#"\bclass=""#),
        replacement: Some(r#"className=""#),
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "vue-react-emits",
        source: "vue",
        target: "react",
        description: "Emitted events become callback props",
        category: "components",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    // angular -> react
    BreakingChangeRule {
        id: "angular-react-modules",
        source: "angular",
        target: "react",
        description: "NgModules and components must be restructured as React component trees",
        category: "components",
        severity: ChangeSeverity::Critical,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "angular-react-di",
        source: "angular",
        target: "react",
        description: "Constructor dependency injection becomes hooks and context",
        category: "architecture",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "angular-react-templates",
        source: "angular",
        target: "react",
        description: "HTML templates with structural directives become JSX",
        category: "templates",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "angular-react-rxjs",
        source: "angular",
        target: "react",
        description: "RxJS observable chains typically collapse into hooks or promises",
        category: "state",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "angular-react-binding",
        source: "angular",
        target: "react",
        description: "Two-way [(ngModel)] bindings become controlled components",
        category: "forms",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    // express -> fastapi
    BreakingChangeRule {
        id: "express-fastapi-handlers",
        source: "express",
        target: "fastapi",
        description: "req/res handler signatures become typed path operations returning models",
        category: "routing",
        severity: ChangeSeverity::Critical,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: Some("https://fastapi.tiangolo.com/tutorial/first-steps/"),
    },
    BreakingChangeRule {
        id: "express-fastapi-middleware",
        source: "express",
        target: "fastapi",
        description: "Middleware chains become FastAPI dependencies or Starlette middleware",
        category: "middleware",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "express-fastapi-errors",
        source: "express",
        target: "fastapi",
        description: "Error-handling middleware becomes exception handlers",
        category: "middleware",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "express-fastapi-async",
        source: "express",
        target: "fastapi",
        description: "Callback- and promise-based handlers become async def path operations",
        category: "runtime",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "express-fastapi-validation",
        source: "express",
        target: "fastapi",
        description: "Ad-hoc body validation becomes pydantic request models",
        category: "validation",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    // express -> nestjs
    BreakingChangeRule {
        id: "express-nestjs-controllers",
        source: "express",
        target: "nestjs",
        description: "Route handlers move into decorated controller classes",
        category: "routing",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: Some("https://docs.nestjs.com/controllers"),
    },
    BreakingChangeRule {
        id: "express-nestjs-middleware",
        source: "express",
        target: "nestjs",
        description: "Custom middleware becomes guards, pipes, or interceptors",
        category: "middleware",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "express-nestjs-bootstrap",
        source: "express",
        target: "nestjs",
        description: "The app.listen bootstrap is replaced by NestFactory",
        category: "runtime",
        severity: ChangeSeverity::Low,
        effort: EffortLevel::Trivial,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    // django -> fastapi
    BreakingChangeRule {
        id: "django-fastapi-orm",
        source: "django",
        target: "fastapi",
        description: "Django ORM models and querysets move to SQLAlchemy",
        category: "data",
        severity: ChangeSeverity::Critical,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "django-fastapi-views",
        source: "django",
        target: "fastapi",
        description: "Class-based views become path operation functions",
        category: "routing",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "django-fastapi-settings",
        source: "django",
        target: "fastapi",
        description: "settings.py configuration becomes pydantic settings",
        category: "configuration",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "django-fastapi-admin",
        source: "django",
        target: "fastapi",
        description: "The Django admin has no FastAPI equivalent and needs a replacement plan",
        category: "tooling",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Large,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
    // react -> next.js
    BreakingChangeRule {
        id: "react-nextjs-router",
        source: "react",
        target: "next.js",
        description: "Client-side routes move to file-system routing under app/ or pages/",
        category: "routing",
        severity: ChangeSeverity::High,
        effort: EffortLevel::Medium,
        automatable: true,
        search_pattern: Some(r#"from ['"]react-router-dom['"]"#),
        replacement: Some(r#"from "next/navigation""#),
        migration_guide: Some("https://nextjs.org/docs/app/building-your-application/routing"),
    },
    BreakingChangeRule {
        id: "react-nextjs-env",
        source: "react",
        target: "next.js",
        description: "REACT_APP_ environment variables become NEXT_PUBLIC_",
        category: "configuration",
        severity: ChangeSeverity::Low,
        effort: EffortLevel::Trivial,
        automatable: true,
        search_pattern: Some(r"REACT_APP_"),
        replacement: Some("NEXT_PUBLIC_"),
        migration_guide: None,
    },
    BreakingChangeRule {
        id: "react-nextjs-ssr",
        source: "react",
        target: "next.js",
        description: "Browser-only globals in render paths break under server rendering",
        category: "runtime",
        severity: ChangeSeverity::Medium,
        effort: EffortLevel::Medium,
        automatable: false,
        search_pattern: None,
        replacement: None,
        migration_guide: None,
    },
];

/// All rules for a (source, target) pair, case-insensitive. Empty when the
/// pair is unknown.
pub fn rules_for(source: &str, target: &str) -> Vec<&'static BreakingChangeRule> {
    let source = source.to_lowercase();
    let target = target.to_lowercase();
    BREAKING_CHANGE_RULES
        .iter()
        .filter(|rule| rule.source == source && rule.target == target)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<&str> = BREAKING_CHANGE_RULES.iter().map(|r| r.id).collect();
        ids.sort();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn automatable_rules_carry_patterns() {
        for rule in BREAKING_CHANGE_RULES.iter().filter(|r| r.automatable) {
            assert!(rule.search_pattern.is_some(), "{} lacks a pattern", rule.id);
            assert!(rule.replacement.is_some(), "{} lacks a replacement", rule.id);
        }
    }

    #[test]
    fn unknown_pair_has_no_rules() {
        assert!(rules_for("express", "rails").is_empty());
        assert!(rules_for("cobol", "fortran").is_empty());
    }

    #[test]
    fn pair_lookup_is_case_insensitive() {
        assert!(!rules_for("React", "Vue").is_empty());
    }
}
