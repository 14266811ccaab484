pub const PROGRESS_CAP: u8 = 85;
pub const PROGRESS_TICK_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
    pub status: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Real Estate Buddy",
        description: "An online real estate platform that enables buyers and sellers to connect, with optimized UI/UX design resulting in 15% increased user engagement and 20% reduced bounce rate.",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=1000&q=80",
        tags: &["React", "Tailwind CSS", "JavaScript", "UI/UX Design"],
        github: "https://github.com/rushikeshpatil2000/real-estate-buddy",
        demo: "https://real-estate-buddy.example.com",
        status: "private",
    },
    Project {
        id: 2,
        title: "Fabric Fault Detection",
        description: "Machine learning model with 92% accuracy to detect fabric defects like missing threads, oil stains, and holes, reducing manual inspection time by 30% and defective products by 5%.",
        image: "https://images.unsplash.com/photo-1573164574511-73c773193279?auto=format&fit=crop&w=1000&q=80",
        tags: &["Python", "Machine Learning", "CNN", "Image Processing"],
        github: "https://github.com/rushikeshpatil2000/fabric-fault-detection",
        demo: "https://fabric-fault-detection.example.com",
        status: "private",
    },
    Project {
        id: 3,
        title: "Segment Anything Model Integration",
        description: "Integrated SAM with 95% accuracy to automate the marking of over 5,000 Khasra boundaries from satellite imagery, reducing manual effort by 40%.",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&w=1000&q=80",
        tags: &["Python", "AI", "Machine Learning", "GIS"],
        github: "https://github.com/rushikeshpatil2000/sam-integration",
        demo: "https://sam-integration.example.com",
        status: "updating",
    },
    Project {
        id: 4,
        title: "Portfolio Website",
        description: "A personal portfolio website built with Rust and Leptos showcasing my projects, skills and professional experience.",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=1000&q=80",
        tags: &["Rust", "Leptos", "Tailwind CSS", "WebAssembly"],
        github: "https://github.com/rushikeshpatil2000/portfolio",
        demo: "https://rushikeshpatil.com",
        status: "public",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Restricted,
    InProgress,
    Unrecognized,
}

impl From<&str> for ProjectStatus {
    fn from(value: &str) -> Self {
        match value {
            "restricted" | "private" => Self::Restricted,
            "in-progress" | "updating" => Self::InProgress,
            _ => Self::Unrecognized,
        }
    }
}

/// The informational panel shown for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPanel {
    PrivateAccess,
    UnderDevelopment,
}

impl StatusPanel {
    pub fn for_status(status: ProjectStatus) -> Option<Self> {
        match status {
            ProjectStatus::Restricted => Some(Self::PrivateAccess),
            ProjectStatus::InProgress => Some(Self::UnderDevelopment),
            ProjectStatus::Unrecognized => None,
        }
    }
}

/// Overlay state for the project details modal.
///
/// Closing keeps `item` and `status` around so the exit transition can still
/// render them; the next [`open`](Self::open) overwrites both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureModal<'a> {
    item: Option<&'a Project>,
    status: ProjectStatus,
    is_open: bool,
    progress: u8,
}

impl<'a> DisclosureModal<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, item: &'a Project, status: ProjectStatus) {
        self.item = Some(item);
        self.status = status;
        self.is_open = true;
        self.progress = 0;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    pub fn item(&self) -> Option<&'a Project> {
        self.item
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn panel(&self) -> Option<StatusPanel> {
        StatusPanel::for_status(self.status)
    }

    /// Whether the progress tick should be running.
    pub fn is_ticking(&self) -> bool {
        self.is_open && self.status == ProjectStatus::InProgress
    }

    /// Advances progress by one step. No-op unless ticking.
    pub fn tick(&mut self) {
        if self.is_ticking() {
            self.progress = (self.progress + 1).min(PROGRESS_CAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updating() -> &'static Project {
        &PROJECTS[2]
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(ProjectStatus::from("restricted"), ProjectStatus::Restricted);
        assert_eq!(ProjectStatus::from("private"), ProjectStatus::Restricted);
        assert_eq!(ProjectStatus::from("in-progress"), ProjectStatus::InProgress);
        assert_eq!(ProjectStatus::from("updating"), ProjectStatus::InProgress);
        assert_eq!(ProjectStatus::from("public"), ProjectStatus::Unrecognized);
        assert_eq!(ProjectStatus::from(""), ProjectStatus::Unrecognized);
    }

    #[test]
    fn test_panel_selection() {
        let mut modal = DisclosureModal::new();
        modal.open(&PROJECTS[0], ProjectStatus::from(PROJECTS[0].status));
        assert_eq!(modal.panel(), Some(StatusPanel::PrivateAccess));

        modal.open(updating(), ProjectStatus::from(updating().status));
        assert_eq!(modal.panel(), Some(StatusPanel::UnderDevelopment));

        modal.open(&PROJECTS[3], ProjectStatus::from(PROJECTS[3].status));
        assert!(modal.is_open());
        assert_eq!(modal.panel(), None);
    }

    #[test]
    fn test_progress_clamps() {
        let mut modal = DisclosureModal::new();
        modal.open(updating(), ProjectStatus::InProgress);
        assert_eq!(modal.progress(), 0);

        for _ in 0..51 {
            modal.tick();
        }
        assert_eq!(modal.progress(), 51);

        for _ in 51..PROGRESS_CAP {
            modal.tick();
        }
        assert_eq!(modal.progress(), PROGRESS_CAP);

        // Never reaches 100
        for _ in 0..200 {
            modal.tick();
        }
        assert_eq!(modal.progress(), 85);
    }

    #[test]
    fn test_progress_frozen_unless_in_progress() {
        let mut modal = DisclosureModal::new();
        modal.tick();
        assert_eq!(modal.progress(), 0);

        modal.open(&PROJECTS[0], ProjectStatus::Restricted);
        assert!(!modal.is_ticking());
        modal.tick();
        assert_eq!(modal.progress(), 0);

        modal.open(updating(), ProjectStatus::InProgress);
        for _ in 0..10 {
            modal.tick();
        }
        modal.set_status(ProjectStatus::Restricted);
        assert!(!modal.is_ticking());
        modal.tick();
        assert_eq!(modal.progress(), 10);
    }

    #[test]
    fn test_close_and_reopen() {
        let mut modal = DisclosureModal::new();
        modal.open(updating(), ProjectStatus::InProgress);
        for _ in 0..20 {
            modal.tick();
        }

        modal.close();
        // Idempotent, and the item survives for the exit transition
        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.is_ticking());
        assert_eq!(modal.item().map(|p| p.id), Some(3));
        modal.tick();
        assert_eq!(modal.progress(), 20);

        modal.open(updating(), ProjectStatus::InProgress);
        assert_eq!(modal.progress(), 0);
        assert!(modal.is_ticking());
    }
}
