//! Static copy for the portfolio sections, plus portrait sizing for the hero.

pub const EMAIL: &str = "rushikeshpatil2100@gmail.com";
pub const PHONE: &str = "+91 90967 58102";
pub const LOCATION: &str = "Pune, Maharashtra, India";

pub const TAGLINE: &str = "A passionate Software Developer specializing in Java, Python, and web technologies with experience in Machine Learning and AI. I develop scalable and innovative solutions that drive impactful results.";

pub const JOURNEY: [&str; 3] = [
    "I am a passionate Software Developer with a strong focus on creating innovative and scalable solutions. My journey in software development started during my B.Tech. in Computer Science & Engineering at MIT ADT - School of Engineering in Pune, which I completed in 2024.",
    "Currently, I'm working as a Software Developer at QuantaSIP Geomatic Informative Solutions Pvt Ltd in Pune, where I've been redesigning UI using React and Tailwind CSS, integrating the Segment Anything Model (SAM) for automated Khasra boundary marking, and optimizing database performance.",
    "My professional focus includes working with Java, Python, React, PostgreSQL, and developing Machine Learning solutions. I'm always excited to take on new challenges and opportunities to expand my knowledge and skills.",
];

pub const EDUCATION: [&str; 3] = [
    "B.Tech. in Computer Science & Engineering | 2020 – 2024",
    "12th in Science | 2018 – 2020",
    "10th in CBSE | 2017 – 2018",
];

pub const CERTIFICATIONS: [&str; 1] = ["IBM - Introduction to Artificial Intelligence (AI)"];

pub struct Skill {
    pub name: &'static str,
    /// devicon class
    pub icon: &'static str,
}

pub static SKILLS: [Skill; 12] = [
    Skill { name: "Java", icon: "devicon-java-plain colored" },
    Skill { name: "Python", icon: "devicon-python-plain colored" },
    Skill { name: "React", icon: "devicon-react-original colored" },
    Skill { name: "JavaScript", icon: "devicon-javascript-plain colored" },
    Skill { name: "HTML", icon: "devicon-html5-plain colored" },
    Skill { name: "CSS", icon: "devicon-css3-plain colored" },
    Skill { name: "Tailwind CSS", icon: "devicon-tailwindcss-original colored" },
    Skill { name: "PostgreSQL", icon: "devicon-postgresql-plain colored" },
    Skill { name: "Machine Learning", icon: "devicon-tensorflow-original colored" },
    Skill { name: "Selenium", icon: "devicon-selenium-original colored" },
    Skill { name: "Git", icon: "devicon-git-plain colored" },
    Skill { name: "SQL", icon: "devicon-azuresqldatabase-plain colored" },
];

pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIALS: [Social; 4] = [
    Social {
        label: "GitHub",
        href: "https://github.com/rushikeshpatil2000",
        icon: "devicon-github-plain",
    },
    Social {
        label: "LinkedIn",
        href: "https://linkedin.com/in/rushikesh-patil-b9a4a2201",
        icon: "devicon-linkedin-plain",
    },
    Social {
        label: "Twitter",
        href: "https://twitter.com/rushikeshpatil",
        icon: "devicon-twitter-original",
    },
    Social {
        label: "Instagram",
        href: "https://instagram.com/rushikesh_patil2000",
        icon: "devicon-instagram-plain",
    },
];

const WIDE_BREAKPOINT: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

/// Size of the hero portrait box for a viewport width and image aspect ratio
/// (width / height). Landscape images are bound by width, everything else by
/// height.
pub fn portrait_frame(viewport_width: f64, aspect_ratio: f64) -> Frame {
    let narrow = viewport_width < WIDE_BREAKPOINT;
    let aspect_ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        1.0
    };
    if aspect_ratio > 1.0 {
        let width = if narrow {
            (viewport_width * 0.8).min(400.0)
        } else {
            (viewport_width * 0.35).min(500.0)
        };
        Frame {
            width,
            height: width / aspect_ratio,
        }
    } else {
        let height = if narrow {
            (viewport_width * 0.8).min(500.0)
        } else {
            (viewport_width * 0.45).min(600.0)
        };
        Frame {
            width: height * aspect_ratio,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_landscape_frame() {
        // narrow viewport caps at 400
        let frame = portrait_frame(800.0, 2.0);
        assert!(approx(frame.width, 400.0));
        assert!(approx(frame.height, 200.0));

        let frame = portrait_frame(375.0, 1.5);
        assert!(approx(frame.width, 300.0));
        assert!(approx(frame.height, 200.0));

        // wide viewport: 35% up to 500
        let frame = portrait_frame(1280.0, 2.0);
        assert!(approx(frame.width, 448.0));
        assert!(approx(frame.height, 224.0));
        let frame = portrait_frame(1920.0, 2.0);
        assert!(approx(frame.width, 500.0));
    }

    #[test]
    fn test_portrait_frame() {
        let frame = portrait_frame(375.0, 0.75);
        assert!(approx(frame.height, 300.0));
        assert!(approx(frame.width, 225.0));

        let frame = portrait_frame(1920.0, 0.5);
        assert!(approx(frame.height, 600.0));
        assert!(approx(frame.width, 300.0));

        // square images take the portrait branch
        let frame = portrait_frame(1100.0, 1.0);
        assert!(approx(frame.height, 495.0));
        assert!(approx(frame.width, 495.0));
    }

    #[test]
    fn test_unloaded_image_is_square() {
        assert_eq!(portrait_frame(800.0, 0.0), portrait_frame(800.0, 1.0));
        assert_eq!(portrait_frame(800.0, f64::NAN), portrait_frame(800.0, 1.0));
    }
}
