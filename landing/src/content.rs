//! Static copy and imagery. Nothing here changes at runtime.

pub const HERO_BACKGROUND: &str = "https://images.unsplash.com/photo-1580587771525-78b9dba3b914";
pub const AREAS_BACKGROUND: &str = "https://images.unsplash.com/photo-1740479772666-2e431ea28711";
pub const CONTACT_BACKGROUND: &str =
    "https://images.pexels.com/photos/4247733/pexels-photo-4247733.jpeg";

#[derive(Clone, Copy, Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: [&'static str; 3],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Residential Appraisal",
        description: "Comprehensive property valuations for single-family homes, condos, and townhouses.",
        image: "https://images.unsplash.com/photo-1494526585095-c41746248156",
        features: ["Market Analysis", "Property Inspection", "Detailed Reports"],
    },
    Service {
        title: "Commercial Appraisal",
        description: "Professional valuations for commercial properties and investment real estate.",
        image: "https://images.pexels.com/photos/277667/pexels-photo-277667.jpeg",
        features: ["Income Approach", "Market Comparison", "Cost Analysis"],
    },
    Service {
        title: "Property Consulting",
        description: "Expert consultation services for real estate decisions and market insights.",
        image: "https://images.unsplash.com/photo-1580587771525-78b9dba3b914",
        features: ["Market Trends", "Investment Analysis", "Expert Advice"],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub experience: &'static str,
    pub phone: &'static str,
    pub image: &'static str,
    pub specialties: [&'static str; 3],
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Michael Dash",
        title: "Certified Residential Real Estate Appraiser",
        experience: "25+ years",
        phone: "678-555-0123",
        image: "https://images.pexels.com/photos/7937208/pexels-photo-7937208.jpeg",
        specialties: ["Residential Properties", "Market Analysis", "Property Inspection"],
    },
    TeamMember {
        name: "Sarah Johnson",
        title: "Certified Commercial Real Estate Appraiser",
        experience: "15+ years",
        phone: "706-555-0456",
        image: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85",
        specialties: ["Commercial Properties", "Investment Analysis", "Consultation"],
    },
];

pub const COUNTIES: &[&str] = &[
    "Henry County",
    "Newton County",
    "Butts County",
    "Spalding County",
    "Fayette County",
    "Clayton County",
    "Rockdale County",
    "Gwinnett County",
];

/// Counties with a physical office.
pub const OFFICES: [&str; 2] = ["Henry County", "Newton County"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offices_are_in_the_service_area() {
        for office in OFFICES {
            assert!(COUNTIES.contains(&office), "{office} missing from COUNTIES");
        }
    }

    #[test]
    fn team_phones_are_dialable() {
        for member in TEAM {
            assert!(
                member.phone.chars().all(|c| c.is_ascii_digit() || c == '-'),
                "{} has an odd phone number",
                member.name
            );
        }
    }
}
