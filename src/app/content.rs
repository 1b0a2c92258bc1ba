//! Static page content: project case studies, skill categories, and work
//! history. The lazy-reveal components treat all of this as opaque data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
    pub visual: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Process Optimization Initiative",
            category: "Operational Strategy",
            problem: "Company was experiencing delays in project delivery and resource allocation inefficiencies, leading to missed deadlines and frustrated stakeholders",
            solution: "Led cross-functional team to analyze and redesign core operational workflows. Implemented new project management framework with automated tracking and resource allocation tools",
            impact: "Reduced project delivery time by 30%, improved resource utilization by 25%, and increased team satisfaction scores by 40%",
            visual: "📊",
        },
        Project {
            id: 2,
            title: "Virtual Team Coordination System",
            category: "Virtual Assistance",
            problem: "Remote team struggled with communication gaps and task visibility, resulting in duplicated work and missed deadlines",
            solution: "Designed and implemented comprehensive virtual coordination system. Created centralized communication hub with integrated task management, daily standups, and progress tracking",
            impact: "Improved team communication efficiency by 50%, reduced missed deadlines by 60%, and enhanced remote collaboration",
            visual: "💻",
        },
        Project {
            id: 3,
            title: "Budget Management Overhaul",
            category: "Business Administration",
            problem: "Department faced budget overruns and lack of spending visibility, creating financial risk and limiting strategic planning capabilities",
            solution: "Developed new budget tracking and approval system. Implemented digital budget management tool with real-time tracking, approval workflows, and automated reporting",
            impact: "Eliminated budget overruns, reduced approval time by 45%, and provided 100% spending visibility to stakeholders",
            visual: "💰",
        },
        Project {
            id: 4,
            title: "Onboarding Process Redesign",
            category: "Management",
            problem: "New employee onboarding was inconsistent and time-consuming, leading to delayed productivity and variable new hire experiences",
            solution: "Redesigned end-to-end onboarding experience. Created structured onboarding program with checklists, automated workflows, and mentorship pairing",
            impact: "Reduced onboarding time from 4 weeks to 2 weeks, improved new hire satisfaction by 35%, and standardized process across organization",
            visual: "🎯",
        },
        Project {
            id: 5,
            title: "Executive Calendar & Meeting Optimization",
            category: "Virtual Assistance",
            problem: "Executive team struggled with meeting overload and inefficient time management, reducing strategic focus time and decision-making quality",
            solution: "Implemented comprehensive calendar management and meeting optimization strategy. Developed priority-based scheduling system, established meeting protocols, and created automated agenda templates with pre-meeting briefs",
            impact: "Reduced executive meeting time by 40%, increased focus time by 8 hours per week, and improved meeting productivity scores by 55%",
            visual: "📅",
        },
    ]
}

/// "All" plus every project category, first-seen order, no duplicates.
pub fn project_categories(projects: &[Project]) -> Vec<&'static str> {
    let mut categories = vec!["All"];
    for project in projects {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100, rendered as a bar width.
    pub level: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: u32,
    pub category: &'static str,
    pub skills: Vec<Skill>,
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: 1,
            category: "Operational Strategy",
            skills: vec![
                Skill { name: "Process Optimization", level: 90, description: "Analyzing and improving operational workflows" },
                Skill { name: "Strategic Planning", level: 85, description: "Developing long-term operational strategies" },
                Skill { name: "Resource Allocation", level: 88, description: "Optimizing resource distribution and utilization" },
                Skill { name: "Performance Metrics", level: 82, description: "Defining and tracking KPIs for operational success" },
                Skill { name: "Change Management", level: 80, description: "Leading organizational transitions and improvements" },
                Skill { name: "Risk Assessment", level: 78, description: "Identifying and mitigating operational risks" },
            ],
        },
        SkillCategory {
            id: 2,
            category: "Business Administration",
            skills: vec![
                Skill { name: "Project Management", level: 92, description: "Planning, executing, and delivering projects on time" },
                Skill { name: "Budget Management", level: 85, description: "Financial planning and cost control" },
                Skill { name: "Data Analysis", level: 88, description: "Interpreting data to drive business decisions" },
                Skill { name: "Stakeholder Communication", level: 90, description: "Managing relationships and expectations" },
                Skill { name: "Documentation", level: 87, description: "Creating clear processes and procedures" },
                Skill { name: "Compliance & Governance", level: 80, description: "Ensuring adherence to policies and regulations" },
            ],
        },
        SkillCategory {
            id: 3,
            category: "Virtual Assistance",
            skills: vec![
                Skill { name: "Calendar Management", level: 95, description: "Scheduling and coordinating meetings efficiently" },
                Skill { name: "Email Management", level: 93, description: "Organizing and prioritizing communications" },
                Skill { name: "Research & Analysis", level: 88, description: "Gathering and synthesizing information" },
                Skill { name: "Travel Coordination", level: 85, description: "Planning and managing business travel" },
                Skill { name: "Digital Tools Proficiency", level: 90, description: "Expert in productivity and collaboration tools" },
                Skill { name: "Task Prioritization", level: 92, description: "Managing multiple priorities effectively" },
            ],
        },
        SkillCategory {
            id: 4,
            category: "Management",
            skills: vec![
                Skill { name: "Team Leadership", level: 85, description: "Motivating and guiding teams to success" },
                Skill { name: "Conflict Resolution", level: 82, description: "Addressing and resolving team challenges" },
                Skill { name: "Performance Management", level: 80, description: "Setting goals and providing feedback" },
                Skill { name: "Delegation", level: 88, description: "Assigning tasks effectively based on strengths" },
                Skill { name: "Training & Development", level: 83, description: "Coaching team members for growth" },
                Skill { name: "Cross-functional Collaboration", level: 90, description: "Working across departments and teams" },
            ],
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: u32,
    pub company: &'static str,
    pub title: &'static str,
    pub dates: &'static str,
    pub achievements: Vec<&'static str>,
}

pub fn work_history() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            company: "Strategic Operations Firm",
            title: "Operational Strategist",
            dates: "2023 - Present",
            achievements: vec![
                "Optimized cross-departmental workflows, reducing operational costs by 28% and saving $120K annually",
                "Led strategic planning initiatives for 5 concurrent projects, delivering all on-time with 95% stakeholder satisfaction",
                "Implemented data-driven decision framework that improved forecasting accuracy by 35%",
                "Designed and executed process improvement roadmap adopted across 4 business units serving 200+ employees",
                "Managed vendor relationships and contract negotiations, achieving 18% cost reduction while maintaining quality standards",
            ],
        },
        Role {
            id: 2,
            company: "Business Solutions Group",
            title: "Operations Coordinator",
            dates: "2021 - 2023",
            achievements: vec![
                "Coordinated operations for 3 regional teams totaling 45+ members, ensuring seamless communication and alignment",
                "Reduced project delivery time by 32% through implementation of agile methodologies and automation tools",
                "Managed operational budget of $250K with 100% compliance and zero budget overruns",
                "Developed comprehensive SOPs and training materials that decreased onboarding time by 40%",
                "Spearheaded digital transformation initiative, migrating 12 manual processes to automated systems with 99.5% accuracy",
            ],
        },
        Role {
            id: 3,
            company: "Tech Startup",
            title: "Executive Virtual Assistant",
            dates: "2020 - 2021",
            achievements: vec![
                "Provided comprehensive administrative support to C-suite executives managing 50+ meetings weekly",
                "Improved executive productivity by 45% through proactive calendar optimization and priority management",
                "Coordinated 20+ high-stakes client presentations and board meetings with zero scheduling conflicts",
                "Managed complex travel arrangements across 8 time zones with 100% accuracy and cost efficiency",
                "Implemented CRM system for client relationship tracking, increasing follow-up rate by 60%",
            ],
        },
        Role {
            id: 4,
            company: "University Business Program",
            title: "Student Organization President & Operations Manager",
            dates: "2019 - 2020",
            achievements: vec![
                "Led organization of 50+ members, increasing active participation by 65% through strategic engagement initiatives",
                "Managed annual operating budget of $35K with full accountability and transparent reporting",
                "Organized 12 professional development events attracting 800+ attendees and securing 15 corporate sponsors",
                "Built partnerships with 8 local businesses, creating internship opportunities for 25 students",
                "Mentored team of 10 committee leaders, developing leadership pipeline and succession planning framework",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::metrics::extract_metrics;

    #[test]
    fn categories_are_unique_and_lead_with_all() {
        let projects = projects();
        let categories = project_categories(&projects);
        assert_eq!(categories[0], "All");
        for (i, c) in categories.iter().enumerate() {
            assert!(!categories[i + 1..].contains(c), "duplicate category {c}");
        }
    }

    #[test]
    fn every_project_impact_yields_metrics() {
        for project in projects() {
            assert!(
                !extract_metrics(project.impact).is_empty(),
                "no metrics in impact copy for {}",
                project.title
            );
        }
    }

    #[test]
    fn skill_levels_fit_the_bar() {
        for category in skill_categories() {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} overflows its bar", skill.name);
            }
        }
    }

    #[test]
    fn work_history_is_reverse_chronological_by_id() {
        let history = work_history();
        for window in history.windows(2) {
            assert!(window[0].id < window[1].id);
        }
    }
}
