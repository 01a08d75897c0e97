//! Static site content — profile, skills, and projects.
//!
//! The data is a configuration constant: supplied at startup, never mutated.
//! `filter_projects` is the only operation over it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// The site owner's profile, rendered in the header, about, and contact
/// sections.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

/// A portfolio project. `demo: None` means there is no live deployment and
/// the card renders its link as "View Code".
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub demo: Option<String>,
}

pub fn profile() -> Profile {
    Profile {
        name: "Bhargav Sunil".to_owned(),
        title: "Full Stack Developer (MERN)".to_owned(),
        summary: "Fresh and enthusiastic Full Stack Developer specializing in \
                  MERN stack development. Passionate about building modern web \
                  applications with clean code and excellent user experiences. \
                  Completed multiple projects demonstrating strong skills in \
                  both frontend and backend development."
            .to_owned(),
        location: "India".to_owned(),
        email: "bhargavsunil2166@gmail.com".to_owned(),
        linkedin: "https://www.linkedin.com/in/bhargav-sunil-yalamati".to_owned(),
        github: "https://github.com/Bhargav-sunil".to_owned(),
    }
}

/// Ordered skills list, display-only.
pub fn skills() -> Vec<String> {
    [
        "React.js",
        "JavaScript (ES6+)",
        "HTML5 & CSS3",
        "Tailwind CSS",
        "Node.js",
        "Express.js",
        "MongoDB",
        "SQLite",
        "RESTful APIs",
        "JWT Authentication",
        "Git & GitHub",
        "Python",
        "Responsive Web Design",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "AI Code Reviewer".to_owned(),
            description: "AI-powered web app for real-time JavaScript code \
                          reviews using Gemini 2.0 Flash, with live syntax \
                          highlighting and backend API integration."
                .to_owned(),
            tags: to_tags(&[
                "React.js",
                "Node.js",
                "Express",
                "Gemini 2.0 Flash API",
                "Code Editor",
                "Markdown",
            ]),
            link: "https://ai-code-reviewer-olive.vercel.app/".to_owned(),
            demo: Some("https://ai-code-reviewer-olive.vercel.app/".to_owned()),
        },
        Project {
            id: 2,
            title: "Multivendor E-Commerce Backend".to_owned(),
            description: "RESTful backend for multivendor e-commerce with \
                          secure authentication, product/vendor management, \
                          and image uploads."
                .to_owned(),
            tags: to_tags(&[
                "Node.js",
                "Express.js",
                "MongoDB",
                "Mongoose",
                "JWT",
                "bcrypt.js",
                "Multer",
                "REST API",
            ]),
            link: "https://github.com/Bhargav-sunil/Backend_Multivendor.git".to_owned(),
            demo: None,
        },
        Project {
            id: 3,
            title: "Task Management System".to_owned(),
            description: "Web app to manage users and tasks with role-based \
                          access, authentication, search, and pagination."
                .to_owned(),
            tags: to_tags(&[
                "React.js",
                "React Router",
                "Node.js",
                "Express.js",
                "SQLite3",
                "JWT",
                "bcryptjs",
            ]),
            link: "https://task-management-seven-plum-86.vercel.app/login".to_owned(),
            demo: Some("https://task-management-seven-plum-86.vercel.app/login".to_owned()),
        },
        Project {
            id: 4,
            title: "JobSearch Platform".to_owned(),
            description: "RESTful backend for managing movies and reviews with \
                          CRUD functionality and SQLite database integration."
                .to_owned(),
            tags: to_tags(&["React.js", "React Router", "REST API", "SQLite", "CSS3", "JavaScript"]),
            link: "https://jobbyapp2166.ccbp.tech".to_owned(),
            demo: Some("https://jobbyapp2166.ccbp.tech".to_owned()),
        },
    ]
}

fn to_tags(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_owned()).collect()
}

/// Case-insensitive substring filter over project title and space-joined
/// tags. An empty query matches everything; result order equals input order.
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<Project> {
    let needle = query.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.tags.join(" ").to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
