//! Page content configuration.
//!
//! Every field has a built-in default and can be overridden on its own by
//! the host page, either in code or through the JSON block the frontend
//! reads at startup.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid landing page config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub hero: HeroConfig,
    pub bio: BioConfig,
    pub services: ServicesConfig,
    pub testimonials: TestimonialsConfig,
    pub contact: ContactConfig,
    pub booking: BookingConfig,
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub cta_text: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Expert Tutoring for Academic Excellence".to_string(),
            subtitle: "Personalized learning experiences to help you achieve your academic goals".to_string(),
            background_image: "https://images.unsplash.com/photo-1523240795612-9a054b0db644?auto=format&fit=crop&q=80".to_string(),
            cta_text: "Book Trial Lesson".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BioConfig {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub credentials: Vec<String>,
    pub specialties: Vec<String>,
    pub image_url: String,
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            name: "Dr. Sarah Johnson".to_string(),
            title: "Professional Mathematics & Physics Tutor".to_string(),
            bio: "With over 15 years of experience in education, I specialize in making complex concepts accessible to students of all levels. My approach combines rigorous academic understanding with practical applications.".to_string(),
            credentials: vec![
                "Ph.D. in Physics from MIT".to_string(),
                "M.Sc. in Mathematics from Stanford".to_string(),
                "Certified Advanced Placement (AP) Instructor".to_string(),
            ],
            specialties: vec![
                "Advanced Mathematics".to_string(),
                "Quantum Physics".to_string(),
                "SAT/ACT Prep".to_string(),
                "College Admissions Counseling".to_string(),
            ],
            image_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=chad".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIcon {
    Book,
    GraduationCap,
    Brain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub heading: String,
    pub intro: String,
    pub services: Vec<Service>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            heading: "Our Services".to_string(),
            intro: "Choose from our range of specialized tutoring services designed to help you achieve your academic goals.".to_string(),
            services: vec![
                Service {
                    icon: ServiceIcon::Book,
                    title: "One-on-One Tutoring".to_string(),
                    description: "Personalized learning sessions tailored to your specific needs and learning style.".to_string(),
                },
                Service {
                    icon: ServiceIcon::GraduationCap,
                    title: "Test Preparation".to_string(),
                    description: "Comprehensive preparation for standardized tests with proven strategies.".to_string(),
                },
                Service {
                    icon: ServiceIcon::Brain,
                    title: "Subject Mastery".to_string(),
                    description: "In-depth coverage of specific subjects to build strong foundational knowledge.".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    /// 0 to 5 stars
    pub rating: u8,
    pub text: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsConfig {
    pub heading: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        let testimonial = |id: u32, name: &str, seed: &str, text: &str, role: &str| Testimonial {
            id,
            name: name.to_string(),
            avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed),
            rating: 5,
            text: text.to_string(),
            role: role.to_string(),
        };

        Self {
            heading: "What Our Students Say".to_string(),
            testimonials: vec![
                testimonial(1, "Sarah Johnson", "sarah",
                    "The tutoring sessions have been transformative for my learning experience. Highly recommended!",
                    "Math Student"),
                testimonial(2, "Michael Chen", "michael",
                    "Exceptional teaching methods and very patient approach. Saw improvement in my grades within weeks.",
                    "Science Student"),
                testimonial(3, "Emily Davis", "emily",
                    "The personalized attention and structured learning plan made all the difference in my studies.",
                    "English Student"),
                testimonial(4, "James Wilson", "james",
                    "Outstanding support and guidance. Really helped me build confidence in my abilities.",
                    "Physics Student"),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub heading: String,
    /// Initial state when the visitor has not dismissed the widget
    pub is_open: bool,
    pub scheduling_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Contact Me".to_string(),
            is_open: true,
            scheduling_url: "https://calendly.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub title: String,
    pub submit_text: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            title: "Book a Session".to_string(),
            submit_text: "Book Session".to_string(),
        }
    }
}
