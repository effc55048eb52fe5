//! Static site content: hero/about/experience/projects/contact data and
//! the `mailto:` composition used by the contact form.

use url::Url;

use crate::{error::*, gallery::GalleryImage, utils::text::percent_encode_component};

pub static MAILTO_SUBJECT_DEFAULT: &str = "Portfolio Contact";

#[derive(Clone, Debug)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub about: String,
    pub nationality: String,
    pub experience_years: String,
    pub location: String,
    pub availability: String,
    pub email: String,
    pub portrait: String,
    pub resume_path: String,
    pub github_url: String,
    pub linkedin_url: String,
}

#[derive(Clone, Debug)]
pub struct SkillGroup {
    pub title: String,
    pub stack: String,
}

#[derive(Clone, Debug)]
pub struct Experience {
    pub period: String,
    pub company: String,
    pub location: String,
    pub role: String,
    pub details: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub enum ProjectKind {
    #[strum(serialize = "Web App")]
    Web,

    #[strum(serialize = "Mobile App")]
    Mobile,
}

#[derive(Clone, Debug)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub kind: ProjectKind,
    pub url: Option<String>,
    pub image: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub gallery: Vec<GalleryImage>,
}

/// User-entered contact form fields, all optional free text.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Profile {
    /// Compose the contact `mailto:` link. An empty subject falls back to
    /// "Portfolio Contact"; the body carries the sender's name, email and
    /// message, percent-encoded.
    pub fn mailto_link(&self, form: &ContactForm) -> FolioResult<String> {
        let subject = if form.subject.is_empty() {
            MAILTO_SUBJECT_DEFAULT
        } else {
            form.subject.as_str()
        };
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            form.name, form.email, form.message
        );

        let link = format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            percent_encode_component(subject),
            percent_encode_component(&body)
        );
        Url::parse(&link)?;

        Ok(link)
    }
}

pub fn profile() -> Profile {
    Profile {
        name: "Johnley Mark D. Delgado".to_string(),
        headline: "Mobile & Full-stack Developer".to_string(),
        summary: "Passionate Mobile & Full-stack Developer dedicated to crafting seamless \
                  digital experiences and robust applications that solve real-world problems."
            .to_string(),
        about: "Hello! I'm Johnley Mark, a versatile Mobile & Full-stack Developer. I \
                specialize in building high-performance mobile applications and robust web \
                solutions. I am committed to continuous learning and delivering top-tier \
                digital products."
            .to_string(),
        nationality: "Filipino".to_string(),
        experience_years: "5+ Years".to_string(),
        location: "Philippines".to_string(),
        availability: "Available for remote work worldwide".to_string(),
        email: "gamer.section102@gmail.com".to_string(),
        portrait: "/hero-portrait.png".to_string(),
        resume_path: "/resume.pdf".to_string(),
        github_url: "https://github.com/johnleydelgado".to_string(),
        linkedin_url: "https://www.linkedin.com/in/johnley-delgado-698348262/".to_string(),
    }
}

pub fn skills() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            title: "Mobile Development".to_string(),
            stack: "React Native, Flutter, iOS (Swift), Android (Kotlin), Expo, Mobile UI/UX \
                    Principles."
                .to_string(),
        },
        SkillGroup {
            title: "Front-End Web".to_string(),
            stack: "HTML5, CSS3, React.js, Next.js, TypeScript, Tailwind CSS, Bootstrap, \
                    Material UI."
                .to_string(),
        },
        SkillGroup {
            title: "Back-End & Cloud".to_string(),
            stack: "Node.js, Express, Python, Django, PostgreSQL, MongoDB, Firebase, AWS, \
                    Docker."
                .to_string(),
        },
        SkillGroup {
            title: "Tools & Workflow".to_string(),
            stack: "Git, GitHub/GitLab, Jira, Figma, Agile/Scrum, CI/CD pipelines, Unit \
                    Testing."
                .to_string(),
        },
    ]
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            period: "Feb 2024 - Jul 2025".to_string(),
            company: "Simple Cloudology".to_string(),
            location: "Remote".to_string(),
            role: "Mobile Developer".to_string(),
            details: strings(&[
                "Collaborated with cross-functional teams to conceptualize and launch \
                 high-performance mobile applications. Successfully increased app store \
                 ratings through UI/UX optimizations and streamlined development processes \
                 using agile methodologies. Maintained strict project budgets while \
                 integrating complex third-party APIs.",
            ]),
            tags: strings(&[
                "Agile",
                "API Integration",
                "Mobile Optimization",
                "Budget Management",
            ]),
        },
        Experience {
            period: "Jan 2022 - Aug 2023".to_string(),
            company: "Indra Philippines, Inc".to_string(),
            location: "Philippines".to_string(),
            role: "Software Engineer".to_string(),
            details: strings(&[
                "Enterprise Middleware Project: Backend development using Node.js, Airflow, \
                 Cloud Run, BigQuery, and Load Balancers.",
                "Crew Commission: Frontend development utilizing Firebase and React.js for \
                 seamless user interfaces.",
                "Corporate IT Portal: Full Stack development implementing Next.js and Prisma \
                 for robust internal tools.",
            ]),
            tags: strings(&["Node.js", "React.js", "Next.js", "Google Cloud", "Python"]),
        },
        Experience {
            period: "2016 - Apr 2022".to_string(),
            company: "CHINET".to_string(),
            location: "Makati City".to_string(),
            role: "Full Stack Developer".to_string(),
            details: strings(&[
                "MDRecords: Full Stack development leveraging Laravel, jQuery, AWS, and \
                 Digital Ocean for scalable deployment.",
                "Personalized Bible App: Mobile application development using Android \
                 Studio, Node.js backend, and optimized SQL/No-SQL database structures.",
            ]),
            tags: strings(&["Laravel", "AWS", "Android Studio", "SQL/No-SQL"]),
        },
        Experience {
            period: "Jan 2021 - Nov 2021".to_string(),
            company: "Simple Cloudology".to_string(),
            location: "Remote".to_string(),
            role: "Lead Developer".to_string(),
            details: strings(&[
                "EHR: Spearheaded development using React.js, Expo, and React Native for \
                 electronic health records systems.",
                "Mad Man Media: Led a team of 5 junior engineers in mobile development \
                 using Android Studio, ensuring code quality and timely delivery.",
            ]),
            tags: strings(&["React Native", "Expo", "Android Studio", "Team Leadership"]),
        },
        Experience {
            period: "Jan 2020 - Nov 2021".to_string(),
            company: "Simple Cloudology".to_string(),
            location: "Remote".to_string(),
            role: "Lead Developer".to_string(),
            details: strings(&[
                "Project Therapute: Designed and developed a comprehensive solution using \
                 React Native, Xcode, Android Studio, and Node.js. Focused on creating a \
                 scalable architecture for mobile health applications.",
            ]),
            tags: strings(&["React Native", "Node.js", "Xcode"]),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "MDRecords".to_string(),
            description: "A comprehensive Electronic Health Records (EHR) system designed to \
                          streamline medical documentation and patient management. Built with \
                          scalable architecture for healthcare providers."
                .to_string(),
            kind: ProjectKind::Web,
            url: Some("https://mdrecords.org/".to_string()),
            image: "/projects/mdrecords.png".to_string(),
            tags: strings(&["Laravel", "jQuery", "AWS", "Digital Ocean", "Full Stack"]),
            featured: true,
            gallery: vec![
                GalleryImage::new("/projects/mdrecords/dashboard.png", "Patient Dashboard"),
                GalleryImage::new("/projects/mdrecords/records.png", "Records Browser"),
                GalleryImage::new("/projects/mdrecords/charting.png", "Clinical Charting"),
                GalleryImage::new("/projects/mdrecords/billing.png", "Billing Overview"),
            ],
        },
        Project {
            title: "Volanta".to_string(),
            description: "A high-performance mobile application delivering seamless user \
                          experiences. Developed with modern mobile technologies focusing on \
                          UI/UX optimization and cross-platform compatibility."
                .to_string(),
            kind: ProjectKind::Mobile,
            url: Some("https://volanta.app/".to_string()),
            image: "/projects/volanta.png".to_string(),
            tags: strings(&["React Native", "Mobile", "iOS", "Android", "API Integration"]),
            featured: true,
            gallery: vec![
                GalleryImage::new("/projects/volanta/map.png", "Live Flight Map"),
                GalleryImage::new("/projects/volanta/logbook.png", "Logbook"),
                GalleryImage::new("/projects/volanta/profile.png", "Pilot Profile"),
            ],
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_link() {
        let profile = profile();
        let form = ContactForm {
            name: "Jane Cruz".to_string(),
            email: "jane@example.com".to_string(),
            subject: String::new(),
            message: "Hi there!".to_string(),
        };

        let link = profile.mailto_link(&form).unwrap();
        assert!(link.starts_with("mailto:gamer.section102@gmail.com?"));
        assert!(link.contains("subject=Portfolio%20Contact"));
        assert!(link.contains("body=Name%3A%20Jane%20Cruz%0AEmail%3A%20jane%40example.com"));
        assert!(link.contains("%0A%0AMessage%3A%0AHi%20there!"));

        let form = ContactForm {
            subject: "Freelance project".to_string(),
            ..form
        };
        let link = profile.mailto_link(&form).unwrap();
        assert!(link.contains("subject=Freelance%20project"));
    }

    #[test]
    fn test_content_shape() {
        assert_eq!(skills().len(), 4);
        assert_eq!(experiences().len(), 5);

        let projects = projects();
        assert_eq!(projects.len(), 2);
        for project in &projects {
            assert!(project.featured);
            assert!(!project.tags.is_empty());
            assert!(!project.gallery.is_empty());
            if let Some(url) = &project.url {
                assert!(Url::parse(url).is_ok());
            }
        }

        let profile = profile();
        assert!(Url::parse(&profile.github_url).is_ok());
        assert!(Url::parse(&profile.linkedin_url).is_ok());
        assert!(profile.resume_path.starts_with('/'));
    }
}
