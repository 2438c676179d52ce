//! Built-in framework detection rules.
//!
//! Detection is data, not control flow: each framework is described by a
//! [`FrameworkPattern`] listing its marker files, declared dependencies,
//! content probes, and directory structure. New frameworks are added by
//! appending a pattern here (or injecting a custom set into the detector),
//! never by touching the scoring code.
//!
//! Patterns without a canonical marker file carry a manifest content probe
//! (the dependency entry in `package.json` / `requirements.txt`), so a
//! project that only declares the framework still crosses the detection
//! threshold.

use crate::core::StackKind;

/// A weighted regex probe applied to files matched by a glob.
#[derive(Debug, Clone, Copy)]
pub struct ContentProbe {
    pub glob: &'static str,
    pub pattern: &'static str,
    pub weight: f64,
}

/// A variant of a base framework (e.g. Next.js on top of React).
///
/// Variant files are checked before variant dependencies; the first rule
/// that matches wins.
#[derive(Debug, Clone, Copy)]
pub struct VariantRule {
    pub name: &'static str,
    pub files: &'static [&'static str],
    pub dependencies: &'static [&'static str],
}

/// Static detection rule for one framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkPattern {
    pub framework: &'static str,
    pub kind: StackKind,
    /// Marker files whose presence is a strong signal (30 points split evenly).
    pub files: &'static [&'static str],
    /// Runtime dependencies looked up in the manifest (20 points split evenly).
    pub dependencies: &'static [&'static str],
    /// Dev dependencies looked up in the manifest (10 points split evenly).
    pub dev_dependencies: &'static [&'static str],
    /// Content probes; each contributes its weight at most once.
    pub content: &'static [ContentProbe],
    /// Directories whose existence is a weak signal (10 points split evenly).
    pub structure: &'static [&'static str],
    /// Tie-break ordering between patterns; higher scans first.
    pub priority: u8,
    pub variants: &'static [VariantRule],
    /// Package whose manifest/lockfile entry yields the framework version.
    pub version_package: Option<&'static str>,
    pub docs: &'static str,
}

pub const BUILTIN_PATTERNS: &[FrameworkPattern] = &[
    FrameworkPattern {
        framework: "angular",
        kind: StackKind::Frontend,
        files: &["angular.json"],
        dependencies: &["@angular/core", "@angular/common"],
        dev_dependencies: &["@angular/cli"],
        content: &[ContentProbe {
            glob: "src/**/*.ts",
            pattern: r"@Component\s*\(",
            weight: 15.0,
        }],
        structure: &["src/app"],
        priority: 9,
        variants: &[],
        version_package: Some("@angular/core"),
        docs: "https://angular.dev",
    },
    FrameworkPattern {
        framework: "nestjs",
        kind: StackKind::Backend,
        files: &["nest-cli.json"],
        dependencies: &["@nestjs/core", "@nestjs/common"],
        dev_dependencies: &["@nestjs/cli"],
        content: &[ContentProbe {
            glob: "src/**/*.ts",
            pattern: r"@Module\s*\(",
            weight: 15.0,
        }],
        structure: &["src"],
        priority: 9,
        variants: &[],
        version_package: Some("@nestjs/core"),
        docs: "https://docs.nestjs.com",
    },
    FrameworkPattern {
        framework: "django",
        kind: StackKind::Backend,
        files: &["manage.py"],
        dependencies: &["django"],
        dev_dependencies: &[],
        content: &[
            ContentProbe {
                glob: "**/settings.py",
                pattern: r"INSTALLED_APPS",
                weight: 20.0,
            },
            ContentProbe {
                glob: "**/*.py",
                pattern: r"from django",
                weight: 10.0,
            },
        ],
        structure: &[],
        priority: 9,
        variants: &[],
        version_package: Some("django"),
        docs: "https://docs.djangoproject.com",
    },
    FrameworkPattern {
        framework: "rails",
        kind: StackKind::Backend,
        files: &["Gemfile", "config/routes.rb"],
        dependencies: &[],
        dev_dependencies: &[],
        content: &[ContentProbe {
            glob: "Gemfile",
            pattern: r#"gem ['"]rails['"]"#,
            weight: 30.0,
        }],
        structure: &["app/controllers", "app/models"],
        priority: 9,
        variants: &[],
        version_package: None,
        docs: "https://guides.rubyonrails.org",
    },
    FrameworkPattern {
        framework: "react",
        kind: StackKind::Frontend,
        files: &[],
        dependencies: &["react", "react-dom"],
        dev_dependencies: &["@types/react", "react-scripts", "@vitejs/plugin-react"],
        content: &[
            ContentProbe {
                glob: "package.json",
                pattern: r#""react"\s*:"#,
                weight: 20.0,
            },
            ContentProbe {
                glob: "src/**/*.jsx",
                pattern: r#"from ['"]react['"]"#,
                weight: 25.0,
            },
            ContentProbe {
                glob: "src/**/*.tsx",
                pattern: r#"from ['"]react['"]"#,
                weight: 25.0,
            },
        ],
        structure: &["src/components"],
        priority: 8,
        variants: &[
            VariantRule {
                name: "Next.js",
                files: &["next.config.js", "next.config.mjs", "next.config.ts"],
                dependencies: &["next"],
            },
            VariantRule {
                name: "Gatsby",
                files: &["gatsby-config.js", "gatsby-config.ts"],
                dependencies: &["gatsby"],
            },
            VariantRule {
                name: "Remix",
                files: &[],
                dependencies: &["@remix-run/react"],
            },
        ],
        version_package: Some("react"),
        docs: "https://react.dev",
    },
    FrameworkPattern {
        framework: "vue",
        kind: StackKind::Frontend,
        files: &["vue.config.js"],
        dependencies: &["vue"],
        dev_dependencies: &["@vitejs/plugin-vue", "vue-loader"],
        content: &[
            ContentProbe {
                glob: "package.json",
                pattern: r#""vue"\s*:"#,
                weight: 15.0,
            },
            ContentProbe {
                glob: "src/**/*.vue",
                pattern: r"<template>",
                weight: 25.0,
            },
        ],
        structure: &["src/components"],
        priority: 8,
        variants: &[VariantRule {
            name: "Nuxt",
            files: &["nuxt.config.js", "nuxt.config.ts"],
            dependencies: &["nuxt"],
        }],
        version_package: Some("vue"),
        docs: "https://vuejs.org",
    },
    FrameworkPattern {
        framework: "laravel",
        kind: StackKind::Fullstack,
        files: &["artisan", "composer.json"],
        dependencies: &[],
        dev_dependencies: &[],
        content: &[ContentProbe {
            glob: "composer.json",
            pattern: r"laravel/framework",
            weight: 30.0,
        }],
        structure: &["app/Http/Controllers"],
        priority: 8,
        variants: &[],
        version_package: None,
        docs: "https://laravel.com/docs",
    },
    FrameworkPattern {
        framework: "svelte",
        kind: StackKind::Frontend,
        files: &["svelte.config.js"],
        dependencies: &["svelte"],
        dev_dependencies: &["@sveltejs/vite-plugin-svelte"],
        content: &[ContentProbe {
            glob: "src/**/*.svelte",
            pattern: r"<script",
            weight: 15.0,
        }],
        structure: &["src/routes"],
        priority: 7,
        variants: &[VariantRule {
            name: "SvelteKit",
            files: &[],
            dependencies: &["@sveltejs/kit"],
        }],
        version_package: Some("svelte"),
        docs: "https://svelte.dev",
    },
    FrameworkPattern {
        framework: "flask",
        kind: StackKind::Backend,
        files: &[],
        dependencies: &["flask"],
        dev_dependencies: &[],
        content: &[
            ContentProbe {
                glob: "requirements.txt",
                pattern: r"(?mi)^flask",
                weight: 20.0,
            },
            ContentProbe {
                glob: "**/*.py",
                pattern: r"from flask import",
                weight: 30.0,
            },
        ],
        structure: &[],
        priority: 7,
        variants: &[],
        version_package: Some("flask"),
        docs: "https://flask.palletsprojects.com",
    },
    FrameworkPattern {
        framework: "fastapi",
        kind: StackKind::Backend,
        files: &[],
        dependencies: &["fastapi"],
        dev_dependencies: &[],
        content: &[
            ContentProbe {
                glob: "requirements.txt",
                pattern: r"(?mi)^fastapi",
                weight: 20.0,
            },
            ContentProbe {
                glob: "**/*.py",
                pattern: r"from fastapi import",
                weight: 30.0,
            },
        ],
        structure: &[],
        priority: 7,
        variants: &[],
        version_package: Some("fastapi"),
        docs: "https://fastapi.tiangolo.com",
    },
    FrameworkPattern {
        framework: "spring",
        kind: StackKind::Backend,
        files: &["mvnw", "gradlew"],
        dependencies: &[],
        dev_dependencies: &[],
        content: &[
            ContentProbe {
                glob: "pom.xml",
                pattern: r"spring-boot",
                weight: 30.0,
            },
            ContentProbe {
                glob: "build.gradle",
                pattern: r"org\.springframework",
                weight: 30.0,
            },
        ],
        structure: &["src/main/java"],
        priority: 7,
        variants: &[],
        version_package: None,
        docs: "https://spring.io/projects/spring-boot",
    },
    FrameworkPattern {
        framework: "express",
        kind: StackKind::Backend,
        files: &[],
        dependencies: &["express"],
        dev_dependencies: &["@types/express"],
        content: &[
            ContentProbe {
                glob: "package.json",
                pattern: r#""express"\s*:"#,
                weight: 20.0,
            },
            ContentProbe {
                glob: "**/*.js",
                pattern: r#"require\(['"]express['"]\)|from ['"]express['"]"#,
                weight: 25.0,
            },
        ],
        structure: &["routes", "src/routes"],
        priority: 6,
        variants: &[],
        version_package: Some("express"),
        docs: "https://expressjs.com",
    },
    FrameworkPattern {
        framework: "fastify",
        kind: StackKind::Backend,
        files: &[],
        dependencies: &["fastify"],
        dev_dependencies: &[],
        content: &[
            ContentProbe {
                glob: "package.json",
                pattern: r#""fastify"\s*:"#,
                weight: 20.0,
            },
            ContentProbe {
                glob: "**/*.js",
                pattern: r#"require\(['"]fastify['"]\)|from ['"]fastify['"]"#,
                weight: 25.0,
            },
        ],
        structure: &[],
        priority: 6,
        variants: &[],
        version_package: Some("fastify"),
        docs: "https://fastify.dev",
    },
];

/// Look up a built-in pattern by framework name (case-insensitive).
pub fn lookup_pattern(name: &str) -> Option<&'static FrameworkPattern> {
    let needle = name.to_lowercase();
    BUILTIN_PATTERNS.iter().find(|p| p.framework == needle)
}

/// Documentation URL for a framework or well-known variant.
pub fn docs_url(name: &str) -> String {
    let needle = name.to_lowercase();
    if let Some(pattern) = lookup_pattern(&needle) {
        return pattern.docs.to_string();
    }
    match needle.as_str() {
        "next.js" | "nextjs" => "https://nextjs.org/docs".to_string(),
        "nuxt" => "https://nuxt.com/docs".to_string(),
        "gatsby" => "https://www.gatsbyjs.com/docs".to_string(),
        "remix" => "https://remix.run/docs".to_string(),
        "sveltekit" => "https://svelte.dev/docs/kit".to_string(),
        _ => String::new(),
    }
}

/// Stack classification for a declared target name.
pub fn stack_kind(name: &str) -> StackKind {
    let needle = name.to_lowercase();
    if let Some(pattern) = lookup_pattern(&needle) {
        return pattern.kind;
    }
    match needle.as_str() {
        "next.js" | "nextjs" | "nuxt" | "sveltekit" | "remix" => StackKind::Fullstack,
        "gatsby" => StackKind::Frontend,
        _ => StackKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_have_bounded_probe_weights() {
        for pattern in BUILTIN_PATTERNS {
            let content_total: f64 = pattern.content.iter().map(|p| p.weight).sum();
            assert!(
                content_total <= 70.0,
                "{} content weight {} exceeds budget",
                pattern.framework,
                content_total
            );
        }
    }

    #[test]
    fn probe_regexes_compile() {
        for pattern in BUILTIN_PATTERNS {
            for probe in pattern.content {
                assert!(
                    regex::Regex::new(probe.pattern).is_ok(),
                    "bad regex for {}",
                    pattern.framework
                );
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup_pattern("React").is_some());
        assert!(lookup_pattern("EXPRESS").is_some());
        assert!(lookup_pattern("cobol").is_none());
    }

    #[test]
    fn docs_for_variants() {
        assert_eq!(docs_url("Next.js"), "https://nextjs.org/docs");
        assert_eq!(docs_url("react"), "https://react.dev");
        assert_eq!(docs_url("made-up"), "");
    }

    #[test]
    fn manifest_only_projects_cross_the_detection_threshold() {
        // dependency budget plus the manifest probe must exceed 30 for
        // patterns with no marker file
        for pattern in BUILTIN_PATTERNS
            .iter()
            .filter(|p| p.files.is_empty() && !p.dependencies.is_empty())
        {
            let dependency_points = 20.0;
            let manifest_probe: f64 = pattern
                .content
                .iter()
                .filter(|probe| {
                    probe.glob == "package.json" || probe.glob == "requirements.txt"
                })
                .map(|probe| probe.weight)
                .sum();
            assert!(
                dependency_points + manifest_probe > 30.0,
                "{} cannot be detected from its manifest alone",
                pattern.framework
            );
        }
    }
}
