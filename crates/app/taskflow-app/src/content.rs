//! Static copy of the landing page.

use taskflow_core::Icon;

pub const PRODUCT_NAME: &str = "TaskFlow RBAC";

pub const HERO_TAGLINE: &str = "A secure, scalable task management system featuring JWT \
     authentication, Role-Based Access Control, and CRUD operations with a Rust and \
     WebAssembly frontend.";

pub const FEATURES_TITLE: &str = "Core Features";
pub const FEATURES_SUBTITLE: &str =
    "Built with security and scalability in mind, implementing industry best practices.";

pub const TECH_TITLE: &str = "Technology Stack";
pub const TECH_SUBTITLE: &str = "Modern tools for modern applications";

pub const FOOTER: &str = "Secure Task Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Lock,
        title: "JWT Authentication",
        description: "Secure token-based authentication with hashed passwords.",
    },
    Feature {
        icon: Icon::Users,
        title: "Role-Based Access",
        description: "Admin and User roles with per-task ownership checks.",
    },
    Feature {
        icon: Icon::Database,
        title: "CRUD Operations",
        description: "Full Create, Read, Update, Delete functionality with input validation.",
    },
    Feature {
        icon: Icon::Shield,
        title: "Secure by Design",
        description: "Typed payloads, validated responses and protected API endpoints.",
    },
];

pub const TECH_STACK: [&str; 7] = [
    "Rust",
    "WebAssembly",
    "dominator",
    "futures-signals",
    "reqwest",
    "serde",
    "JWT",
];
