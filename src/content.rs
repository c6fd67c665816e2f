//! Static page content. Icons are icon-font class names, never markup.

pub const OWNER_NAME: &str = "Sumit Pandya";
pub const OWNER_ROLE: &str = "Full-Stack Developer";
pub const AVAILABILITY: &str = "Open to new projects";
pub const REPOSITORIES_URL: &str = "https://github.com/PandyaSumit?tab=repositories";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com/PandyaSumit",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/sumitpandya1/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "X Profile",
        href: "https://x.com/sumitpandya01",
        icon: "extra-x",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Frontend Development",
        description: "Modern, responsive web applications using React, Next.js, and TypeScript with pixel-perfect designs.",
        icon: "extra-monitor",
    },
    Service {
        title: "Backend Development",
        description: "Scalable server-side solutions with Node.js, Express, and secure API development.",
        icon: "extra-server",
    },
    Service {
        title: "Full-Stack Solutions",
        description: "End-to-end web applications with seamless frontend-backend integration and deployment.",
        icon: "extra-code",
    },
    Service {
        title: "Database Design",
        description: "Efficient database architecture using MongoDB, PostgreSQL, and optimized data structures.",
        icon: "extra-database",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        number: "50+",
        label: "Projects Completed",
    },
    Stat {
        number: "2+",
        label: "Years Experience",
    },
    Stat {
        number: "100%",
        label: "Client Satisfaction",
    },
    Stat {
        number: "24/7",
        label: "Support Available",
    },
];

pub const CORE_COMPETENCIES: [&str; 6] = [
    "React",
    "Node.js",
    "TypeScript",
    "MongoDB",
    "REST APIs",
    "System Design",
];

pub const FOOTER_BLURB: &str = "Full-stack web developer specializing in creating elegant, responsive, and user-friendly applications with modern technologies.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub period: &'static str,
    pub place: &'static str,
    pub note: &'static str,
    pub current: bool,
}

pub const TIMELINE: [Milestone; 2] = [
    Milestone {
        title: "Software Engineer Intern",
        period: "Jan 2025 - Apr 2025",
        place: "Upfroz Infotech, Surat",
        note: "Developed full-stack web applications and contributed to client projects",
        current: true,
    },
    Milestone {
        title: "B.E in Computer Engineering",
        period: "2021 - 2025",
        place: "Gujarat Technological University",
        note: "CGPA: 8.45/10",
        current: false,
    },
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    #[default]
    Web,
    Ai,
    Programming,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Web,
        SkillCategory::Ai,
        SkillCategory::Programming,
        SkillCategory::Tools,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SkillCategory::Web => "Web Development",
            SkillCategory::Ai => "AI & Automation",
            SkillCategory::Programming => "Competitive Programming",
            SkillCategory::Tools => "Developer Tools",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SkillCategory::Web => "Full-stack web applications with modern frameworks",
            SkillCategory::Ai => "AI integration and intelligent automation solutions",
            SkillCategory::Programming => "Problem-solving and algorithmic thinking",
            SkillCategory::Tools => "Development environment and productivity tools",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SkillCategory::Web => "extra-code",
            SkillCategory::Ai => "extra-brain",
            SkillCategory::Programming => "extra-trophy",
            SkillCategory::Tools => "extra-wrench",
        }
    }

    pub fn skills(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Web => &[
                "React.js",
                "Node.js",
                "Express.js",
                "MongoDB",
                "Tailwind CSS",
                "Python",
                "JavaScript",
                "HTML5",
                "CSS3",
            ],
            SkillCategory::Ai => &[
                "LangChain",
                "Retrieval-Augmented Generation (RAG)",
                "Vector Databases (Pinecone)",
                "LLM API Integration",
                "TensorFlow.js",
                "Automation Scripts",
            ],
            SkillCategory::Programming => &[
                "Data Structures",
                "Algorithms",
                "Problem-Solving",
                "Time Complexity Analysis",
                "Space Optimization",
                "Competitive Coding",
            ],
            SkillCategory::Tools => &[
                "Git",
                "VS Code",
                "IntelliJ",
                "Terminal/CLI",
                "Package Managers",
                "Version Control",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Web,
    Mobile,
    Api,
}

/// Project filter tab.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectKind),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectKind::Web),
        ProjectFilter::Only(ProjectKind::Mobile),
        ProjectFilter::Only(ProjectKind::Api),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Only(ProjectKind::Web) => "Web Apps",
            ProjectFilter::Only(ProjectKind::Mobile) => "Mobile Apps",
            ProjectFilter::Only(ProjectKind::Api) => "API",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(kind) => project.kind == kind,
        }
    }
}

/// Tags shown on a card before collapsing the rest into a `+N` chip.
pub const VISIBLE_TAGS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub kind: ProjectKind,
    pub tags: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub code_link: &'static str,
}

impl Project {
    pub fn visible_tags(&self) -> &'static [&'static str] {
        &self.tags[..self.tags.len().min(VISIBLE_TAGS)]
    }

    /// Number of tags hidden behind the overflow chip.
    pub fn hidden_tags(&self) -> usize {
        self.tags.len().saturating_sub(VISIBLE_TAGS)
    }
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "LMS platform",
        description: "Built a full-stack e-learning app with secure authentication and role-based access. Instructors can upload content, track revenue, and manage enrollments. Integrated Stripe for payments and enabled students to explore and purchase courses by niche.",
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&h=600",
        kind: ProjectKind::Web,
        tags: &["React", "Node.js", "MongoDB", "Express"],
        demo_link: None,
        code_link: "https://github.com/PandyaSumit/LMS-MERN",
    },
    Project {
        title: "BookStore",
        description: "Developed a full-stack book management web application that allows users to seamlessly upload, create, filter, and search for books. Designed with a user-friendly interface and robust backend functionality to support dynamic content interaction.",
        image: "https://raw.githubusercontent.com/PandyaSumit/BookStore/refs/heads/main/Client/src/assets/page2.png",
        kind: ProjectKind::Web,
        tags: &["React", "Node.js", "MongoDB", "Express"],
        demo_link: None,
        code_link: "https://github.com/PandyaSumit/BookStore",
    },
    Project {
        title: "Draggable Todo",
        description: "A drag-and-drop task board for organizing todos across columns, with state kept in the browser between visits.",
        image: "https://images.unsplash.com/photo-1561484930-998b6a7b22e8?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&h=600",
        kind: ProjectKind::Web,
        tags: &["React", "CSS"],
        demo_link: Some("https://draggable-todo-sigma.vercel.app/"),
        code_link: "https://github.com/PandyaSumit/Draggable-todo",
    },
];

pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub title: &'static str,
    pub details: &'static str,
    pub link: Option<&'static str>,
    pub icon: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        title: "Email",
        details: "pandyasumit01@gmail.com",
        link: Some("mailto:pandyasumit01@gmail.com"),
        icon: "extra-email",
    },
    ContactDetail {
        title: "Phone",
        details: "+91 93163 XXXXX",
        link: None,
        icon: "extra-phone",
    },
    ContactDetail {
        title: "Location",
        details: "Surat, India",
        link: None,
        icon: "extra-location",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_keeps_everything() {
        assert_eq!(filter_projects(ProjectFilter::All).len(), PROJECTS.len());
    }

    #[test]
    fn test_kind_filters() {
        let web = filter_projects(ProjectFilter::Only(ProjectKind::Web));
        assert!(web.iter().all(|p| p.kind == ProjectKind::Web));
        assert!(filter_projects(ProjectFilter::Only(ProjectKind::Mobile)).is_empty());
        assert!(filter_projects(ProjectFilter::Only(ProjectKind::Api)).is_empty());
    }

    #[test]
    fn test_tag_overflow() {
        let lms = &PROJECTS[0];
        assert_eq!(lms.visible_tags(), &["React", "Node.js", "MongoDB"]);
        assert_eq!(lms.hidden_tags(), 1);

        let todo = &PROJECTS[2];
        assert_eq!(todo.visible_tags(), &["React", "CSS"]);
        assert_eq!(todo.hidden_tags(), 0);
    }

    #[test]
    fn test_every_skill_category_has_skills() {
        for category in SkillCategory::ALL {
            assert!(!category.skills().is_empty(), "{}", category.title());
        }
        assert_eq!(SkillCategory::default(), SkillCategory::Web);
    }
}
