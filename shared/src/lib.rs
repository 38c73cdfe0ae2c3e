use serde::{Deserialize, Serialize};

// ===== NAVIGATION MODEL =====

/// A single entry in a navigation tree.
///
/// A node is either a clickable leaf or an expandable group, never both.
/// The original site data occasionally carried an `href` on group entries;
/// it was never rendered, so the model does not represent it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Leaf { label: String, href: String },
    Group { label: String, children: Vec<MenuNode> },
}

impl MenuNode {
    pub fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        MenuNode::Leaf {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Group {
            label: label.into(),
            children,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuNode::Leaf { label, .. } => label,
            MenuNode::Group { label, .. } => label,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, MenuNode::Group { .. })
    }
}

/// A named top-level dropdown: one ordered sequence of menu nodes.
///
/// Built once at startup, read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub label: String,
    pub items: Vec<MenuNode>,
}

impl NavMenu {
    pub fn new(label: impl Into<String>, items: Vec<MenuNode>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

// ===== NAVIGATION TRAVERSAL =====

/// Labels of every node, depth-first, preserving sequence order.
pub fn pre_order_labels(items: &[MenuNode]) -> Vec<String> {
    let mut labels = Vec::new();
    collect_labels(items, &mut labels);
    labels
}

fn collect_labels(items: &[MenuNode], labels: &mut Vec<String>) {
    for node in items {
        labels.push(node.label().to_string());
        if let MenuNode::Group { children, .. } = node {
            collect_labels(children, labels);
        }
    }
}

/// Leaf link targets in visit order, verbatim.
pub fn leaf_hrefs(items: &[MenuNode]) -> Vec<String> {
    let mut hrefs = Vec::new();
    collect_hrefs(items, &mut hrefs);
    hrefs
}

fn collect_hrefs(items: &[MenuNode], hrefs: &mut Vec<String>) {
    for node in items {
        match node {
            MenuNode::Leaf { href, .. } => hrefs.push(href.clone()),
            MenuNode::Group { children, .. } => collect_hrefs(children, hrefs),
        }
    }
}

/// Total number of nodes in the forest.
pub fn node_count(items: &[MenuNode]) -> usize {
    items
        .iter()
        .map(|node| match node {
            MenuNode::Leaf { .. } => 1,
            MenuNode::Group { children, .. } => 1 + node_count(children),
        })
        .sum()
}

// ===== PAGE CONTENT TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub headline: String,
    pub tagline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AboutItem {
    pub icon: String,
    pub title: String,
    pub text: String,
}

/// One card in the services or technology grid. `id` is the in-page
/// anchor that navigation leaves may target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub id: String,
    pub title: String,
    pub blurb: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub role: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Location,
    Phone,
    Hours,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
    pub kind: ContactKind,
    pub lines: Vec<String>,
}

// ===== SITE CONTENT =====

/// The whole static catalog the page renders from. Constructed once at
/// startup and validated before mounting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: String,
    pub hero: HeroContent,
    pub about_intro: String,
    pub about_items: Vec<AboutItem>,
    pub services: Vec<ServiceCard>,
    pub technology: Vec<ServiceCard>,
    pub doctors: Vec<Profile>,
    pub lab_team: Vec<Profile>,
    pub contact: Vec<ContactDetail>,
    pub menus: Vec<NavMenu>,
    pub helpline: String,
}

/// Fixed anchors of the page skeleton; card ids extend this set.
pub const SECTION_IDS: [&str; 7] = [
    "home",
    "about",
    "services",
    "tech",
    "doctors",
    "labquality",
    "contact",
];

impl SiteContent {
    pub fn bluegene() -> Self {
        Self {
            brand: "BlueGene".to_string(),
            hero: HeroContent {
                headline: "Personalized Healthcare Meets Advanced Technology".to_string(),
                tagline: "From fertility care to dermatology and cosmetology, and from \
                          cryopreservation to lab automation, we offer clear guidance and \
                          safe, evidence-based care."
                    .to_string(),
                primary_cta: CallToAction {
                    label: "Book Appointment".to_string(),
                    href: "#contact".to_string(),
                },
                secondary_cta: CallToAction {
                    label: "Meet Our Experts".to_string(),
                    href: "#about".to_string(),
                },
            },
            about_intro: "BlueGene combines medical expertise with advanced technology to \
                          deliver safe, ethical, and future-ready healthcare."
                .to_string(),
            about_items: vec![
                AboutItem {
                    icon: "🎯".to_string(),
                    title: "Mission".to_string(),
                    text: "Personalized healthcare grounded in ethics, empathy, and \
                           measurable outcomes."
                        .to_string(),
                },
                AboutItem {
                    icon: "⚙️".to_string(),
                    title: "What We Do".to_string(),
                    text: "Infertility & skin clinics, cosmetology, cryopreservation, lab \
                           services and knowledge products."
                        .to_string(),
                },
                AboutItem {
                    icon: "💡".to_string(),
                    title: "Why Choose Us".to_string(),
                    text: "Experienced doctors, robust lab practices, and transparent \
                           communication."
                        .to_string(),
                },
            ],
            services: vec![
                ServiceCard {
                    id: "infertility".to_string(),
                    title: "Prasad Infertility Solutions".to_string(),
                    blurb: "Comprehensive fertility care: diagnostics, IUI, IVF, counseling, \
                            and cryo options with clear consent and quality controls."
                        .to_string(),
                },
                ServiceCard {
                    id: "skin".to_string(),
                    title: "Prasad Skin Solutions".to_string(),
                    blurb: "Dermatology for psoriasis, acne, eczema and pigmentation with \
                            clinician-led plans and careful follow-up."
                        .to_string(),
                },
                ServiceCard {
                    id: "cosmetology".to_string(),
                    title: "Cosmetology".to_string(),
                    blurb: "Medically supervised aesthetics: lasers, peels, hair restoration, \
                            injectables and anti-ageing care."
                        .to_string(),
                },
            ],
            technology: vec![
                ServiceCard {
                    id: "cryo".to_string(),
                    title: "Cryo Preservation".to_string(),
                    blurb: "Long-term secure storage of cells and tissues using validated \
                            protocols and traceability."
                        .to_string(),
                },
                ServiceCard {
                    id: "products".to_string(),
                    title: "Products & Services".to_string(),
                    blurb: "Consumables and custom solutions to support labs and ART clinics."
                        .to_string(),
                },
            ],
            doctors: vec![
                Profile::new(
                    "Dr. Suma Kantipudi, M.D., D.G.O",
                    "IVF Specialist, Regenerative Medicine",
                ),
                Profile::new(
                    "Dr. S. Raghavender, MD (General Medicine)",
                    "Senior Physician & Diabetologist",
                ),
                Profile::new(
                    "Dr. Basaveshwar Gujar, MS (General Surgery)",
                    "Senior Consultant Surgeon",
                ),
                Profile::new(
                    "Dr. Uday Shekar Reddy, MS Ortho, Mch Ortho",
                    "Orthopedics & Joint Replacement",
                ),
                Profile::new(
                    "Dr. Laxmi Prasanna Inugurthi, MBBS, D.C.H",
                    "Senior Pediatrician",
                ),
                Profile::new("Dr. Laxmi Rao, PhD", "Senior Principal Scientist, CCMB"),
                Profile::new("Dr. Tripura Chaturvedula, PhD", "Scientist, CCMB"),
                Profile::new("Dr. Reelina Basu, PhD", "SERB National Post-Doctoral Fellow"),
                Profile::new("Dr. Amina, MD Pathology", "Hematologist, Apollo Hospitals"),
            ],
            lab_team: vec![
                Profile::new(
                    "Dr. B. Sandeeptha, PhD Biochemistry",
                    "Research Associate",
                ),
                Profile::new(
                    "Mr. Surendra Tattikota, M.Sc Biomedical Genetics",
                    "In-charge Stem Cell Lab",
                ),
                Profile::new(
                    "Mr. G. Vikram Kumar Reddy, M.Phil, ISO 9001",
                    "Manager, QA & QC",
                ),
                Profile::new("Ms. Sri Vidya, Pharm-D", "Clinical Research Coordinator"),
                Profile::new("Dr. M. Mounika, B.V.Sc.", "Pre-clinical Studies In-charge"),
                Profile::new("Mr. Dhana Lakshmi, DMLT", "Lab Assistant"),
            ],
            contact: vec![
                ContactDetail {
                    kind: ContactKind::Location,
                    lines: vec![
                        "MIG - 303, KPHB Road, No 4, Remedy Hospital Lane,".to_string(),
                        "K P H B Phase 1, Kukatpally, Hyderabad, Telangana 500072".to_string(),
                    ],
                },
                ContactDetail {
                    kind: ContactKind::Phone,
                    lines: vec![
                        "📞 809 6000 600".to_string(),
                        "✉️ hello@bluegene.health".to_string(),
                    ],
                },
                ContactDetail {
                    kind: ContactKind::Hours,
                    lines: vec!["Working Hours: Mon–Sat, 9:00 AM – 7:00 PM".to_string()],
                },
            ],
            menus: vec![
                NavMenu::new(
                    "Healthcare Services",
                    vec![
                        MenuNode::leaf("Prasad Infertility Solutions", "#infertility"),
                        MenuNode::leaf("Prasad Skin Solutions", "#skin"),
                        MenuNode::leaf("Cosmetology", "#cosmetology"),
                    ],
                ),
                NavMenu::new(
                    "Technology Solutions",
                    vec![
                        MenuNode::group(
                            "Cryo Preservation",
                            vec![
                                MenuNode::leaf("Fertility Cryo Preservation", "#fertilitycryo"),
                                MenuNode::leaf("Stem Cell Banking", "#stemcell"),
                            ],
                        ),
                        MenuNode::group(
                            "Products & Services",
                            vec![
                                MenuNode::leaf(
                                    "Cell Culture Media and Processing",
                                    "#cellculture",
                                ),
                                MenuNode::leaf("Buffers", "#buffers"),
                                MenuNode::leaf("Custom Media Services", "#custommedia"),
                                MenuNode::group(
                                    "Medical Media and ART",
                                    vec![
                                        MenuNode::leaf("Sperm Wash Media", "#spermwash"),
                                        MenuNode::leaf(
                                            "Multi Purpose Handling Media",
                                            "#multipurpose",
                                        ),
                                    ],
                                ),
                            ],
                        ),
                    ],
                ),
                NavMenu::new(
                    "Our Experts",
                    vec![
                        MenuNode::leaf("Doctors", "#doctors"),
                        MenuNode::leaf("Lab & Quality Team", "#labquality"),
                    ],
                ),
            ],
            helpline: "809 6000 600".to_string(),
        }
    }

    /// Anchors that actually exist on the rendered page: the fixed section
    /// skeleton plus every card id.
    pub fn section_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = SECTION_IDS.iter().map(|id| id.to_string()).collect();
        ids.extend(self.services.iter().map(|card| card.id.clone()));
        ids.extend(self.technology.iter().map(|card| card.id.clone()));
        ids
    }

    /// In-page menu targets with no matching section or card id. The
    /// renderer does not validate targets; this exists for startup
    /// diagnostics only.
    pub fn unresolved_anchors(&self) -> Vec<String> {
        let ids = self.section_ids();
        let mut unresolved = Vec::new();
        for menu in &self.menus {
            for href in leaf_hrefs(&menu.items) {
                if let Some(anchor) = href.strip_prefix('#') {
                    if !ids.iter().any(|id| id == anchor) && !unresolved.contains(&href) {
                        unresolved.push(href.clone());
                    }
                }
            }
        }
        unresolved
    }

    /// Structural precondition check, run once before mounting. Content is
    /// static and trusted, so a violation is a programming error and the
    /// caller fails fast.
    pub fn validate(&self) -> Result<(), ContentError> {
        for menu in &self.menus {
            if menu.label.trim().is_empty() {
                return Err(ContentError::EmptyMenuLabel);
            }
            validate_nodes(&menu.label, &menu.items)?;
        }
        for card in self.services.iter().chain(&self.technology) {
            if card.id.trim().is_empty() || card.title.trim().is_empty() {
                return Err(ContentError::BlankCard {
                    title: card.title.clone(),
                });
            }
        }
        for profile in self.doctors.iter().chain(&self.lab_team) {
            if profile.name.trim().is_empty() {
                return Err(ContentError::BlankProfile);
            }
        }
        Ok(())
    }
}

fn validate_nodes(menu: &str, items: &[MenuNode]) -> Result<(), ContentError> {
    for node in items {
        if node.label().trim().is_empty() {
            return Err(ContentError::EmptyNodeLabel {
                menu: menu.to_string(),
            });
        }
        match node {
            MenuNode::Leaf { label, href } => {
                if href.trim().is_empty() {
                    return Err(ContentError::EmptyHref {
                        menu: menu.to_string(),
                        label: label.clone(),
                    });
                }
            }
            MenuNode::Group { children, .. } => validate_nodes(menu, children)?,
        }
    }
    Ok(())
}

// ===== CONTENT VALIDATION ERRORS =====

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    EmptyMenuLabel,
    EmptyNodeLabel { menu: String },
    EmptyHref { menu: String, label: String },
    BlankCard { title: String },
    BlankProfile,
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::EmptyMenuLabel => write!(f, "navigation menu with empty label"),
            ContentError::EmptyNodeLabel { menu } => {
                write!(f, "menu '{menu}' contains a node with an empty label")
            }
            ContentError::EmptyHref { menu, label } => {
                write!(f, "menu '{menu}' leaf '{label}' has an empty link target")
            }
            ContentError::BlankCard { title } => {
                write!(f, "card '{title}' is missing an id or title")
            }
            ContentError::BlankProfile => write!(f, "profile card with empty name"),
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Vec<MenuNode> {
        vec![
            MenuNode::leaf("A", "#a"),
            MenuNode::group("B", vec![MenuNode::leaf("C", "#c")]),
        ]
    }

    #[test]
    fn pre_order_visits_every_node_once_in_sequence_order() {
        assert_eq!(pre_order_labels(&sample_tree()), ["A", "B", "C"]);
        assert_eq!(node_count(&sample_tree()), 3);
    }

    #[test]
    fn pre_order_descends_before_moving_to_next_sibling() {
        let items = vec![
            MenuNode::group(
                "outer",
                vec![MenuNode::group(
                    "middle",
                    vec![MenuNode::leaf("inner", "#deep")],
                )],
            ),
            MenuNode::leaf("after", "#after"),
        ];
        assert_eq!(
            pre_order_labels(&items),
            ["outer", "middle", "inner", "after"]
        );
        assert_eq!(node_count(&items), 4);
    }

    #[test]
    fn leaf_hrefs_are_collected_verbatim() {
        let items = vec![
            MenuNode::leaf("external", "https://example.com/a?b=1&c=2"),
            MenuNode::group(
                "nested",
                vec![MenuNode::leaf("odd", "#Needs%20No-Escaping_What.So.Ever")],
            ),
        ];
        assert_eq!(
            leaf_hrefs(&items),
            [
                "https://example.com/a?b=1&c=2",
                "#Needs%20No-Escaping_What.So.Ever",
            ]
        );
    }

    #[test]
    fn empty_forest_traverses_to_nothing() {
        assert!(pre_order_labels(&[]).is_empty());
        assert_eq!(node_count(&[]), 0);
    }

    #[test]
    fn group_with_no_children_still_counts_as_a_node() {
        let items = vec![MenuNode::group("empty", vec![])];
        assert_eq!(pre_order_labels(&items), ["empty"]);
        assert_eq!(node_count(&items), 1);
        assert!(leaf_hrefs(&items).is_empty());
    }

    #[test]
    fn shipped_content_passes_validation() {
        let content = SiteContent::bluegene();
        assert_eq!(content.validate(), Ok(()));
    }

    #[test]
    fn shipped_menus_preserve_authoring_order() {
        let content = SiteContent::bluegene();
        let tech = &content.menus[1];
        assert_eq!(
            pre_order_labels(&tech.items),
            [
                "Cryo Preservation",
                "Fertility Cryo Preservation",
                "Stem Cell Banking",
                "Products & Services",
                "Cell Culture Media and Processing",
                "Buffers",
                "Custom Media Services",
                "Medical Media and ART",
                "Sperm Wash Media",
                "Multi Purpose Handling Media",
            ]
        );
    }

    #[test]
    fn service_anchors_resolve_but_deep_catalog_anchors_do_not() {
        let content = SiteContent::bluegene();
        let unresolved = content.unresolved_anchors();
        assert!(!unresolved.contains(&"#infertility".to_string()));
        assert!(!unresolved.contains(&"#cryo".to_string()));
        assert!(unresolved.contains(&"#fertilitycryo".to_string()));
    }

    #[test]
    fn empty_node_label_is_rejected() {
        let mut content = SiteContent::bluegene();
        content.menus[0].items.push(MenuNode::leaf("", "#x"));
        assert_eq!(
            content.validate(),
            Err(ContentError::EmptyNodeLabel {
                menu: "Healthcare Services".to_string(),
            })
        );
    }

    #[test]
    fn empty_leaf_href_is_rejected_anywhere_in_the_tree() {
        let mut content = SiteContent::bluegene();
        content.menus[2].items.push(MenuNode::group(
            "Wrapper",
            vec![MenuNode::leaf("Broken", "  ")],
        ));
        assert_eq!(
            content.validate(),
            Err(ContentError::EmptyHref {
                menu: "Our Experts".to_string(),
                label: "Broken".to_string(),
            })
        );
    }

    #[test]
    fn menu_nodes_deserialize_from_catalog_json() {
        let json = r##"[
            {"Leaf": {"label": "Doctors", "href": "#doctors"}},
            {"Group": {"label": "Services", "children": [
                {"Leaf": {"label": "Buffers", "href": "#buffers"}}
            ]}}
        ]"##;
        let items: Vec<MenuNode> = serde_json::from_str(json).unwrap();
        assert_eq!(
            items,
            [
                MenuNode::leaf("Doctors", "#doctors"),
                MenuNode::group("Services", vec![MenuNode::leaf("Buffers", "#buffers")]),
            ]
        );
    }
}
