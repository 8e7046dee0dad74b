//! # Refund & Returns Policy
//!
//! The storefront's refund policy as structured data, so the web page,
//! emails and support tooling all render the same text.
//!
//! ```text
//! REFUND_POLICY (static template, "{store}" placeholders)
//!        │
//!        │ for_store("ADHYAA PICKLES")
//!        ▼
//! PolicyPage (owned, serializable) ──► to_plain_text()
//! ```

use std::fmt::Write as _;

use serde::Serialize;

/// Placeholder replaced with the configured store name.
pub const STORE_PLACEHOLDER: &str = "{store}";

/// A block of policy content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Paragraph(&'static str),
    Bullets(&'static [&'static str]),
    Steps(&'static [&'static str]),
}

/// A numbered policy section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

/// A policy template. Text may contain [`STORE_PLACEHOLDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDocument {
    pub title: &'static str,
    pub intro: &'static [&'static str],
    pub sections: &'static [Section],
    pub closing: &'static str,
}

impl PolicyDocument {
    /// Fills in the store name.
    pub fn for_store(&self, store_name: &str) -> PolicyPage {
        let fill = |text: &str| text.replace(STORE_PLACEHOLDER, store_name);
        let fill_all = |items: &[&str]| items.iter().map(|t| fill(*t)).collect::<Vec<_>>();

        PolicyPage {
            title: fill(self.title),
            intro: fill_all(self.intro),
            sections: self
                .sections
                .iter()
                .map(|section| PageSection {
                    heading: fill(section.heading),
                    blocks: section
                        .blocks
                        .iter()
                        .map(|block| match block {
                            Block::Paragraph(text) => PageBlock::Paragraph(fill(*text)),
                            Block::Bullets(items) => PageBlock::Bullets(fill_all(*items)),
                            Block::Steps(items) => PageBlock::Steps(fill_all(*items)),
                        })
                        .collect(),
                })
                .collect(),
            closing: fill(self.closing),
        }
    }
}

/// A block of a rendered policy page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "content")]
pub enum PageBlock {
    Paragraph(String),
    Bullets(Vec<String>),
    Steps(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSection {
    pub heading: String,
    pub blocks: Vec<PageBlock>,
}

/// A policy page for one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPage {
    pub title: String,
    pub intro: Vec<String>,
    pub sections: Vec<PageSection>,
    pub closing: String,
}

impl PolicyPage {
    /// Renders the policy as plain text with numbered headings.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", self.title);
        for line in &self.intro {
            let _ = writeln!(out, "{}\n", line);
        }

        for (index, section) in self.sections.iter().enumerate() {
            let _ = writeln!(out, "{}. {}\n", index + 1, section.heading);
            for block in &section.blocks {
                match block {
                    PageBlock::Paragraph(text) => {
                        let _ = writeln!(out, "{}", text);
                    }
                    PageBlock::Bullets(items) => {
                        for item in items {
                            let _ = writeln!(out, "  • {}", item);
                        }
                    }
                    PageBlock::Steps(items) => {
                        for (step, item) in items.iter().enumerate() {
                            let _ = writeln!(out, "  {}) {}", step + 1, item);
                        }
                    }
                }
            }
            out.push('\n');
        }

        out.push_str(&self.closing);
        out.push('\n');
        out
    }
}

/// The storefront's refund & returns policy.
pub const REFUND_POLICY: PolicyDocument = PolicyDocument {
    title: "Refund & Returns Policy",
    intro: &[
        "Thank you for shopping at {store}. We take great pride in crafting premium homemade pickles with authentic recipes and the finest ingredients. Your satisfaction is our priority.",
        "Please read our Refund & Returns Policy carefully.",
    ],
    sections: &[
        Section {
            heading: "Eligibility for Refund & Returns",
            blocks: &[
                Block::Paragraph("Due to the perishable nature of our products and for hygiene reasons, we can only accept returns and offer refunds under the following specific conditions:"),
                Block::Bullets(&[
                    "Damaged Product: If your order arrives damaged or tampered with.",
                    "Incorrect Product: If you receive a product different from what you ordered.",
                    "Missing Items: If your order is incomplete.",
                ]),
                Block::Paragraph("We do not offer refunds or returns if:"),
                Block::Bullets(&[
                    "You simply change your mind after receiving the product.",
                    "The product has been opened or consumed, unless it falls under the \"damaged\" or \"incorrect product\" category.",
                    "The product was damaged due to improper storage after delivery.",
                ]),
            ],
        },
        Section {
            heading: "Timeframe for Raising a Concern",
            blocks: &[Block::Paragraph(
                "You must notify us of any issues (damaged, incorrect, or missing items) within 24 hours of receiving your order. Any claims made after this period may not be accepted.",
            )],
        },
        Section {
            heading: "How to Initiate a Return/Refund",
            blocks: &[
                Block::Paragraph("To initiate a claim, please follow these steps:"),
                Block::Steps(&[
                    "Contact Us: Immediately email us at support@adhyaapickles.com within the 24-hour window.",
                    "Provide Details: include your Order Number, a clear description of the issue (e.g. \"damaged jar\", \"wrong pickle received\"), clear photos or a short video of the damaged, incorrect or missing item (mandatory), and your preferred contact information.",
                ]),
            ],
        },
        Section {
            heading: "Our Review Process",
            blocks: &[Block::Bullets(&[
                "Once we receive your email and supporting evidence, our team will review your claim.",
                "We may contact you for further information or clarification.",
                "We aim to respond to all claims within 2-3 business days.",
            ])],
        },
        Section {
            heading: "Refund or Replacement",
            blocks: &[
                Block::Paragraph("If your claim is approved:"),
                Block::Bullets(&[
                    "Damaged/Incorrect/Missing Product: We will offer you a replacement of the same product at no additional cost, or a full refund to your original payment method, at our discretion.",
                    "Refund Processing: Refunds will be processed within 7-10 business days after approval. The time for the refund to reflect in your account may vary depending on your bank or payment provider.",
                ]),
            ],
        },
        Section {
            heading: "Shipping Costs",
            blocks: &[Block::Paragraph(
                "If a return or refund is approved due to our error (damaged, incorrect, or missing product), {store} will cover any associated shipping costs for returns or replacements.",
            )],
        },
        Section {
            heading: "Contact Us",
            blocks: &[
                Block::Paragraph("If you have any questions about our Refund & Returns Policy, please contact us:"),
                Block::Bullets(&["Email: support@adhyaapickles.com"]),
            ],
        },
    ],
    closing: "Thank you for choosing {store}. We appreciate your business and are committed to ensuring a delightful experience with our traditional homemade Indian pickles.",
};
