//! Company copy shared by header, contact and footer sections.

pub const COMPANY_NAME: &str = "Supreme Group";
pub const LOGO_SRC: &str = "/logo.webp";
pub const FOOTER_BACKGROUND_SRC: &str = "/footer-bg.webp";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com";
/// Display-only label; there is no locale switching behind it.
pub const LANGUAGE_LABEL: &str = "ENG";
pub const HEAD_OFFICE_ADDRESS: &str = "Supreme House, 110, 16th Road, Chembur, Mumbai \u{2013} 400071.";

/// DOM id of the contact section, target of the header "Contact Us" link.
pub const CONTACT_SECTION_ID: &str = "contact";

/// Label/value pair shown in the "Get in touch" column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Address", value: "110, 16th Road, Chembur, Mumbai - 400071" },
    ContactDetail { label: "Phone", value: "+91 22 25208822" },
    ContactDetail { label: "Email", value: "info@supremegroup.co.in" },
];

/// Titled column of footer links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn { title: "APPLICATIONS", links: &["Apparel", "Automotive", "Filtration", "Customised Nonwoven"] },
    FooterColumn { title: "COMPANY", links: &["Who We Are", "Global Competency", "Innovation", "ESG Impact"] },
    FooterColumn { title: "MORE", links: &["Contact Us", "Careers"] },
    FooterColumn { title: "FOLLOW US", links: &["LinkedIn"] },
];

/// Copyright line for the given year.
#[must_use]
pub fn copyright_line(year: i32) -> String {
    format!("\u{a9}{year}. All Rights Reserved.")
}

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;
