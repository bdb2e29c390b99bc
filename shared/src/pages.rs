//! Fixed site pages that are not backed by content records.

/// One titled block of copy on a fixed page.
#[derive(Debug, Clone, Copy)]
pub struct PageSection {
    /// Section heading.
    pub heading: &'static str,
    /// Paragraphs in order.
    pub paragraphs: &'static [&'static str],
    /// Optional bullet list rendered after the paragraphs.
    pub list: &'static [&'static str],
}

/// Every page the site serves outside the sell, guide and FAQ families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticPage {
    /// Lead form and text-photos option.
    GetOffer,
    /// Phone and email.
    Contact,
    /// What photos to send for a quote.
    PhotosForQuote,
    /// Factors behind an offer.
    HowPricingWorks,
    /// Privacy policy.
    Privacy,
    /// Terms of use.
    Terms,
}

impl StaticPage {
    /// All fixed pages in sitemap order.
    pub const ALL: [StaticPage; 6] = [
        StaticPage::GetOffer,
        StaticPage::Contact,
        StaticPage::PhotosForQuote,
        StaticPage::HowPricingWorks,
        StaticPage::Privacy,
        StaticPage::Terms,
    ];

    /// Site path, without a trailing slash.
    pub const fn path(self) -> &'static str {
        match self {
            StaticPage::GetOffer => "/get-offer",
            StaticPage::Contact => "/contact",
            StaticPage::PhotosForQuote => "/resources/photos-for-quote",
            StaticPage::HowPricingWorks => "/resources/how-pricing-works",
            StaticPage::Privacy => "/privacy",
            StaticPage::Terms => "/terms",
        }
    }

    /// `<h1>` and title text without the brand suffix.
    pub fn title(self) -> &'static str {
        match self {
            StaticPage::GetOffer => "Get an Offer",
            StaticPage::Contact => "Contact",
            StaticPage::PhotosForQuote => "Photos to Send for a Fast Quote",
            StaticPage::HowPricingWorks => "How We Price Wine and Spirits",
            StaticPage::Privacy => "Privacy Policy",
            StaticPage::Terms => "Terms of Use",
        }
    }

    /// Meta description.
    pub fn description(self) -> &'static str {
        match self {
            StaticPage::GetOffer => {
                "Submit photos and details to get a direct offer for your collectible bottles. \
                 Use our form or text photos to 213-770-9463."
            },
            StaticPage::Contact => {
                "Contact Proof Cellars. Call or text 213-770-9463 (213-770-WINE) or email \
                 info@proofcellars.com."
            },
            StaticPage::PhotosForQuote => {
                "Learn exactly what photos to send when selling wine or spirits, and the \
                 mistakes that slow a quote down."
            },
            StaticPage::HowPricingWorks => {
                "Understand what factors affect the value of your wine and spirits: market \
                 demand, condition, provenance, and storage history."
            },
            StaticPage::Privacy => {
                "Privacy Policy for Proof Cellars. Learn how we collect, use, and protect your \
                 information when you use our services."
            },
            StaticPage::Terms => {
                "Terms of Use for Proof Cellars. Understand the terms and conditions for using \
                 our website and services."
            },
        }
    }

    /// Whether the page shows the phone and email card.
    pub fn shows_contact_card(self) -> bool {
        matches!(self, StaticPage::GetOffer | StaticPage::Contact)
    }

    /// Body copy.
    pub fn sections(self) -> &'static [PageSection] {
        match self {
            StaticPage::GetOffer => GET_OFFER,
            StaticPage::Contact => CONTACT,
            StaticPage::PhotosForQuote => PHOTOS_FOR_QUOTE,
            StaticPage::HowPricingWorks => HOW_PRICING_WORKS,
            StaticPage::Privacy => PRIVACY,
            StaticPage::Terms => TERMS,
        }
    }
}

const GET_OFFER: &[PageSection] = &[PageSection {
    heading: "What to include",
    paragraphs: &["Use the form, or text photos if that is easier."],
    list: &[
        "Your name",
        "City and state",
        "Bottle list (names, sizes, vintages)",
        "Photos: front label, back label, capsule/seal, fill level, box if available, any flaws",
    ],
}];

const CONTACT: &[PageSection] = &[PageSection {
    heading: "Best way to reach us",
    paragraphs: &["The fastest way to reach us is by text or through the Get an Offer form."],
    list: &[],
}];

const PHOTOS_FOR_QUOTE: &[PageSection] = &[
    PageSection {
        heading: "The photos we need",
        paragraphs: &["Clear, well-lit photos let us quote quickly and accurately."],
        list: &[
            "Front label showing producer, name, and vintage or age statement",
            "Back label, including any importer or lot details",
            "Capsule, cork, or seal from above",
            "Fill level, shot at eye level",
            "Original box or case, if you have it",
            "Close-ups of any damage or flaws",
        ],
    },
    PageSection {
        heading: "Common mistakes",
        paragraphs: &[],
        list: &[
            "Glare or flash that hides the label",
            "Group shots where no label is readable",
            "Leaving out damage that we will find on inspection",
        ],
    },
];

const HOW_PRICING_WORKS: &[PageSection] = &[
    PageSection {
        heading: "Quick answer",
        paragraphs: &["Several factors determine what we can offer for your bottles."],
        list: &[
            "Market demand: what buyers are currently paying",
            "Condition: label, capsule, fill level, and packaging",
            "Provenance: where the bottle has been stored and by whom",
            "Completeness: original packaging adds value",
            "Photos help us provide accurate quotes faster",
            "Final offers are confirmed after review and inspection",
        ],
    },
    PageSection {
        heading: "Market demand",
        paragraphs: &[
            "The primary driver of value is what the market is currently paying for a bottle. \
             We track recent transactions across auction houses, retail channels, and private \
             sales to understand current price ranges.",
        ],
        list: &[],
    },
];

const PRIVACY: &[PageSection] = &[
    PageSection {
        heading: "Overview",
        paragraphs: &[
            "Proof Cellars operates proofcellars.com. This policy describes how we collect, use, \
             and share information when you use our website or contact us about selling wine or \
             spirits.",
        ],
        list: &[],
    },
    PageSection {
        heading: "Text messaging and phone communications",
        paragraphs: &[
            "When you text or call us we store your phone number, messages, and photos, and use \
             them only to respond to your inquiry. Standard messaging and data rates may apply.",
        ],
        list: &[],
    },
    PageSection {
        heading: "How we share information",
        paragraphs: &["We do not sell your personal information."],
        list: &[],
    },
];

const TERMS: &[PageSection] = &[
    PageSection {
        heading: "Description of service",
        paragraphs: &[
            "We are a direct buyer. We do not operate as a consignment service, auction house, or \
             marketplace connecting buyers and sellers.",
        ],
        list: &[],
    },
    PageSection {
        heading: "Eligibility",
        paragraphs: &["You must be at least 21 years of age to use our website and services."],
        list: &[],
    },
    PageSection {
        heading: "Quotes and offers",
        paragraphs: &[
            "Submitting information does not create a binding agreement to sell or an obligation \
             for us to purchase. A binding agreement is formed only when both parties agree to \
             specific terms in writing.",
        ],
        list: &[],
    },
];
