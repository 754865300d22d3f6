//! Built-in checklist for the web app monorepo layout.

pub const REQUIRED_FILES: [&str; 7] = [
    "vercel.json",
    "package.json",
    "client/package.json",
    "server/package.json",
    "DEPLOYMENT.md",
    "client/.env.example",
    "server/.env.example",
];

pub const REQUIRED_DIRECTORIES: [&str; 2] = ["client/dist", "server/dist"];

pub const DEFAULT_BUILD_COMMAND: &str = "npm run build";

pub const SCRIPT_REQUIREMENTS: [(&str, &[&str]); 3] = [
    ("package.json", &["build", "vercel-build"]),
    ("client/package.json", &["dev", "build"]),
    ("server/package.json", &["dev", "build", "start"]),
];

pub const PLATFORM_CONFIG_PATH: &str = "vercel.json";

pub const PLATFORM_SECTIONS: [&str; 5] = [
    "buildCommand",
    "outputDirectory",
    "functions",
    "rewrites",
    "headers",
];

pub const SECURITY_HEADERS: [&str; 4] = [
    "X-Content-Type-Options",
    "X-Frame-Options",
    "X-XSS-Protection",
    "Referrer-Policy",
];

pub const ENV_TEMPLATES: [&str; 2] = ["client/.env.example", "server/.env.example"];

pub const NEXT_STEPS: [&str; 4] = [
    "Push your code to the Git repository connected to Vercel",
    "Import the project in the Vercel dashboard (or run `vercel --prod`)",
    "Set the environment variables listed in client/.env.example and server/.env.example",
    "Deploy and verify the health endpoint and security headers on the live URL",
];
