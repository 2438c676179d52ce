//! Static dependency compatibility and replacement tables.
//!
//! Both tables are keyed by (package, target framework). Packages with no
//! entry are assumed compatible — the optimistic default keeps unknown
//! utility packages from flooding the report with false positives.

use crate::core::{ChangeSeverity, EffortLevel, ReplacementConfidence};

/// Marks a package as incompatible with a target framework.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityRule {
    pub package: &'static str,
    pub target: &'static str,
    pub reason: &'static str,
    pub severity: ChangeSeverity,
    pub resolution: Option<&'static str>,
}

/// Suggested replacement for an incompatible package.
#[derive(Debug, Clone, Copy)]
pub struct ReplacementRule {
    pub from: &'static str,
    pub target: &'static str,
    pub to: &'static str,
    pub confidence: ReplacementConfidence,
    pub effort: EffortLevel,
    pub notes: Option<&'static str>,
}

pub const INCOMPATIBLE_RULES: &[CompatibilityRule] = &[
    // Node web stack vs Python targets
    CompatibilityRule {
        package: "express",
        target: "fastapi",
        reason: "Node.js web framework; the target runtime is Python",
        severity: ChangeSeverity::Critical,
        resolution: Some("Rewrite route handlers as FastAPI path operations"),
    },
    CompatibilityRule {
        package: "body-parser",
        target: "fastapi",
        reason: "Express middleware; FastAPI parses request bodies natively",
        severity: ChangeSeverity::Medium,
        resolution: Some("Use FastAPI request models instead"),
    },
    CompatibilityRule {
        package: "express-session",
        target: "fastapi",
        reason: "Express session middleware does not run under Python",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "passport",
        target: "fastapi",
        reason: "Node.js auth middleware; no Python runtime",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "morgan",
        target: "fastapi",
        reason: "Express request logger; no Python runtime",
        severity: ChangeSeverity::Low,
        resolution: None,
    },
    CompatibilityRule {
        package: "multer",
        target: "fastapi",
        reason: "Express upload middleware; no Python runtime",
        severity: ChangeSeverity::Medium,
        resolution: None,
    },
    CompatibilityRule {
        package: "cors",
        target: "fastapi",
        reason: "Express CORS middleware; no Python runtime",
        severity: ChangeSeverity::Low,
        resolution: Some("Use Starlette CORSMiddleware"),
    },
    CompatibilityRule {
        package: "helmet",
        target: "fastapi",
        reason: "Express security headers middleware; no Python runtime",
        severity: ChangeSeverity::Low,
        resolution: None,
    },
    CompatibilityRule {
        package: "mongoose",
        target: "fastapi",
        reason: "Node.js MongoDB ODM; no Python runtime",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "sequelize",
        target: "fastapi",
        reason: "Node.js ORM; no Python runtime",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "jsonwebtoken",
        target: "fastapi",
        reason: "Node.js JWT library; no Python runtime",
        severity: ChangeSeverity::Medium,
        resolution: None,
    },
    CompatibilityRule {
        package: "socket.io",
        target: "fastapi",
        reason: "Node.js realtime server; no Python runtime",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "nodemon",
        target: "fastapi",
        reason: "Node.js process watcher; the target toolchain is Python",
        severity: ChangeSeverity::Low,
        resolution: Some("uvicorn --reload covers local iteration"),
    },
    CompatibilityRule {
        package: "ejs",
        target: "fastapi",
        reason: "Node.js template engine; no Python runtime",
        severity: ChangeSeverity::Medium,
        resolution: None,
    },
    CompatibilityRule {
        package: "pug",
        target: "fastapi",
        reason: "Node.js template engine; no Python runtime",
        severity: ChangeSeverity::Medium,
        resolution: None,
    },
    // React stack vs Vue target
    CompatibilityRule {
        package: "react",
        target: "vue",
        reason: "Core React runtime is replaced by Vue",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
    CompatibilityRule {
        package: "react-dom",
        target: "vue",
        reason: "React renderer is replaced by Vue",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
    CompatibilityRule {
        package: "react-router-dom",
        target: "vue",
        reason: "React-only router",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "redux",
        target: "vue",
        reason: "React-centric state container",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "react-redux",
        target: "vue",
        reason: "React bindings for redux",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "@reduxjs/toolkit",
        target: "vue",
        reason: "React-centric state tooling",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "styled-components",
        target: "vue",
        reason: "CSS-in-JS bound to React components",
        severity: ChangeSeverity::Medium,
        resolution: Some("Vue single-file components ship scoped styles"),
    },
    CompatibilityRule {
        package: "@tanstack/react-query",
        target: "vue",
        reason: "React adapter of TanStack Query",
        severity: ChangeSeverity::Medium,
        resolution: None,
    },
    CompatibilityRule {
        package: "formik",
        target: "vue",
        reason: "React form state library",
        severity: ChangeSeverity::Medium,
        resolution: None,
    },
    CompatibilityRule {
        package: "react-hook-form",
        target: "vue",
        reason: "React form state library",
        severity: ChangeSeverity::Medium,
        resolution: None,
    },
    // Vue/Angular stacks vs React target
    CompatibilityRule {
        package: "vue",
        target: "react",
        reason: "Core Vue runtime is replaced by React",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
    CompatibilityRule {
        package: "vuex",
        target: "react",
        reason: "Vue-only state container",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "pinia",
        target: "react",
        reason: "Vue-only state container",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "vue-router",
        target: "react",
        reason: "Vue-only router",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "@angular/core",
        target: "react",
        reason: "Angular runtime is replaced by React",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
    CompatibilityRule {
        package: "@angular/common",
        target: "react",
        reason: "Angular runtime module",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
    CompatibilityRule {
        package: "@angular/forms",
        target: "react",
        reason: "Angular-only forms module",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "@angular/router",
        target: "react",
        reason: "Angular-only router",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "rxjs",
        target: "react",
        reason: "Pervasive observable pipelines rarely survive a React port",
        severity: ChangeSeverity::Medium,
        resolution: Some("Most subscriptions become hooks or plain promises"),
    },
    // Express alternatives vs NestJS target
    CompatibilityRule {
        package: "koa",
        target: "nestjs",
        reason: "Competing HTTP framework; NestJS owns the server lifecycle",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "hapi",
        target: "nestjs",
        reason: "Competing HTTP framework; NestJS owns the server lifecycle",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    // CRA / Gatsby vs Next.js target
    CompatibilityRule {
        package: "react-scripts",
        target: "next.js",
        reason: "Create React App toolchain is replaced by the Next.js build",
        severity: ChangeSeverity::Medium,
        resolution: Some("Remove after adopting the Next.js toolchain"),
    },
    CompatibilityRule {
        package: "react-router-dom",
        target: "next.js",
        reason: "File-system routing replaces the client router",
        severity: ChangeSeverity::High,
        resolution: None,
    },
    CompatibilityRule {
        package: "gatsby",
        target: "next.js",
        reason: "Competing React meta-framework",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
    // Python web stacks vs Django target
    CompatibilityRule {
        package: "flask",
        target: "django",
        reason: "Competing Python web framework",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
    CompatibilityRule {
        package: "fastapi",
        target: "django",
        reason: "Competing Python web framework",
        severity: ChangeSeverity::Critical,
        resolution: None,
    },
];

pub const REPLACEMENT_RULES: &[ReplacementRule] = &[
    ReplacementRule {
        from: "express",
        target: "fastapi",
        to: "fastapi",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Large,
        notes: Some("Route handlers become async path operations"),
    },
    ReplacementRule {
        from: "body-parser",
        target: "fastapi",
        to: "fastapi",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Trivial,
        notes: Some("Request parsing is built into FastAPI"),
    },
    ReplacementRule {
        from: "express-session",
        target: "fastapi",
        to: "starlette",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Medium,
        notes: Some("SessionMiddleware ships with Starlette"),
    },
    ReplacementRule {
        from: "passport",
        target: "fastapi",
        to: "fastapi-users",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Large,
        notes: None,
    },
    ReplacementRule {
        from: "mongoose",
        target: "fastapi",
        to: "beanie",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Large,
        notes: Some("Async ODM over motor"),
    },
    ReplacementRule {
        from: "sequelize",
        target: "fastapi",
        to: "sqlalchemy",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Large,
        notes: None,
    },
    ReplacementRule {
        from: "jsonwebtoken",
        target: "fastapi",
        to: "pyjwt",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Small,
        notes: None,
    },
    ReplacementRule {
        from: "multer",
        target: "fastapi",
        to: "python-multipart",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Small,
        notes: None,
    },
    ReplacementRule {
        from: "socket.io",
        target: "fastapi",
        to: "python-socketio",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "ejs",
        target: "fastapi",
        to: "jinja2",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "pug",
        target: "fastapi",
        to: "jinja2",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "react-router-dom",
        target: "vue",
        to: "vue-router",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "redux",
        target: "vue",
        to: "pinia",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "react-redux",
        target: "vue",
        to: "pinia",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "@reduxjs/toolkit",
        target: "vue",
        to: "pinia",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "@tanstack/react-query",
        target: "vue",
        to: "@tanstack/vue-query",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Small,
        notes: Some("Same core API behind the framework adapter"),
    },
    ReplacementRule {
        from: "formik",
        target: "vue",
        to: "vee-validate",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "react-hook-form",
        target: "vue",
        to: "vee-validate",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "vuex",
        target: "react",
        to: "@reduxjs/toolkit",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "pinia",
        target: "react",
        to: "zustand",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "vue-router",
        target: "react",
        to: "react-router-dom",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "@angular/forms",
        target: "react",
        to: "react-hook-form",
        confidence: ReplacementConfidence::Medium,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "@angular/router",
        target: "react",
        to: "react-router-dom",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Medium,
        notes: None,
    },
    ReplacementRule {
        from: "react-router-dom",
        target: "next.js",
        to: "next",
        confidence: ReplacementConfidence::High,
        effort: EffortLevel::Small,
        notes: Some("File-system routing plus next/navigation"),
    },
];

/// Incompatibility lookup keyed by (package, target), case-insensitive on
/// the target name.
pub fn find_incompatibility(package: &str, target: &str) -> Option<&'static CompatibilityRule> {
    let target = target.to_lowercase();
    INCOMPATIBLE_RULES
        .iter()
        .find(|rule| rule.package == package && rule.target == target)
}

/// Replacement lookup keyed by (package, target), case-insensitive on the
/// target name.
pub fn find_replacement(package: &str, target: &str) -> Option<&'static ReplacementRule> {
    let target = target.to_lowercase();
    REPLACEMENT_RULES
        .iter()
        .find(|rule| rule.from == package && rule.target == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_packages_have_no_rule() {
        assert!(find_incompatibility("lodash", "fastapi").is_none());
        assert!(find_incompatibility("left-pad", "vue").is_none());
    }

    #[test]
    fn target_lookup_is_case_insensitive() {
        assert!(find_incompatibility("express", "FastAPI").is_some());
        assert!(find_replacement("redux", "Vue").is_some());
    }

    #[test]
    fn replacements_reference_incompatible_packages() {
        for replacement in REPLACEMENT_RULES {
            assert!(
                find_incompatibility(replacement.from, replacement.target).is_some(),
                "replacement {} -> {} has no matching incompatibility",
                replacement.from,
                replacement.to
            );
        }
    }
}
