//! Static page copy: pricing tiers, process steps and audit checklists.

/// A priced offering on the Pricing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    /// Billing suffix such as "/ month".
    pub period: Option<&'static str>,
    pub summary: &'static str,
    pub includes: &'static [&'static str],
    pub note: &'static str,
}

/// A group of tiers sharing a heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingGroup {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub tiers: &'static [PricingTier],
}

pub const ENTRY_TIER: PricingTier = PricingTier {
    name: "End-to-End Diagnostic + Action Plan",
    price: "$350 one-time",
    period: None,
    summary: "For teams who want clarity before committing to builds.",
    includes: &[
        "where leads leak",
        "what's breaking under load",
        "what's missing ownership",
        "what to fix first",
    ],
    note: "You leave with a clear, prioritized roadmap, even if we never work together.",
};

pub const PRICING_GROUPS: &[PricingGroup] = &[
    PricingGroup {
        heading: "Core Builds (One-Time)",
        blurb: "For teams who already know what they need built.",
        tiers: &[
            PricingTier {
                name: "High-Conversion Landing Page",
                price: "$500 – $800",
                period: None,
                summary: "For capturing and qualifying demand.",
                includes: &[
                    "conversion-focused structure",
                    "clean copy implementation",
                    "form or booking integration",
                    "basic tracking setup",
                ],
                note: "Built to ship fast and actually convert.",
            },
            PricingTier {
                name: "Fully Functional Website",
                price: "$1,200 – $1,800",
                period: None,
                summary: "For teams that need a proper foundation.",
                includes: &[
                    "multi-page website",
                    "mobile-first, fast loading",
                    "SEO-ready structure",
                    "clean handoff and documentation",
                ],
                note: "Not a brochure. A working asset.",
            },
            PricingTier {
                name: "Funnels & Booking Systems",
                price: "$800 – $1,500",
                period: None,
                summary: "For routing traffic into booked calls.",
                includes: &[
                    "funnel flow design",
                    "lead capture + qualification",
                    "calendar and follow-up integration",
                    "end-to-end testing",
                ],
                note: "No broken handoffs.",
            },
        ],
    },
    PricingGroup {
        heading: "Ongoing Ownership",
        blurb: "For teams that want the system running, not just built.",
        tiers: &[
            PricingTier {
                name: "AI & Automation Systems",
                price: "$2,500 – $4,500",
                period: Some("/ month"),
                summary: "This is AI operating inside your business.",
                includes: &[
                    "AI lead qualification",
                    "CRM integration and scoring",
                    "automated follow-ups",
                    "AI voice or chat workflows (where applicable)",
                    "system monitoring and improvements",
                ],
                note: "Month-to-month. We earn retention by keeping things working.",
            },
            PricingTier {
                name: "System Management (Non-AI)",
                price: "$1,500 – $3,000",
                period: Some("/ month"),
                summary: "For stability and continuous improvement.",
                includes: &[
                    "monitoring and fixes",
                    "performance stabilization",
                    "small iterative improvements",
                    "priority support when things break",
                ],
                note: "Growth should feel boring when it's working.",
            },
        ],
    },
];

/// One step of the delivery process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Diagnose the system",
        body: "We map how leads actually move today, from first touch to booked call, and find where they leak.",
    },
    ProcessStep {
        title: "Design around the bottleneck",
        body: "Fixes are sequenced by impact. The constraint that costs the most gets owned first.",
    },
    ProcessStep {
        title: "Deploy fast, without chaos",
        body: "Changes ship in small, tested increments so nothing that works today breaks tomorrow.",
    },
    ProcessStep {
        title: "Stabilize before scaling",
        body: "Handoffs, tracking and follow-ups are verified under real load before we add volume.",
    },
    ProcessStep {
        title: "Improve what compounds",
        body: "Once stable, we iterate on the parts of the system that keep paying back over time.",
    },
];

pub const AUDIT_IS: &[&str] = &[
    "A system diagnostic.",
    "A review of how your growth system behaves in the real world, from first touch to booked call.",
    "An identification of bottlenecks, broken handoffs, and quiet points of failure.",
    "A focus on where efficiency is bleeding and where ownership is missing.",
    "A structural analysis of growth issues, not dramatic ones.",
];

pub const AUDIT_IS_NOT: &[&str] = &[
    "A sales call.",
    "A generic strategy session.",
    "A pitch disguised as a review.",
    "A place for persuasion over clarity.",
    "A manufactured opportunity if there isn't a real one.",
];

/// Options for the audit form's "Business Model" select, as (value, label).
pub const BUSINESS_MODELS: &[(&str, &str)] = &[
    ("coach", "Coach"),
    ("consultant", "Consultant"),
    ("creator", "Creator"),
    ("service", "Service Business"),
    ("other", "Other"),
];

/// Footer link columns.
pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Platform", &["Architecture", "Integrations", "Security"]),
    ("Company", &["Manifesto", "Careers", "Legal"]),
];

/// Free-text diagnostic question on the audit intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuditQuestion {
    /// Form field name sent to the relay.
    pub field: &'static str,
    pub question: &'static str,
    pub hint: &'static str,
    pub rows: u32,
    pub placeholder: &'static str,
}

pub const AUDIT_QUESTIONS: &[AuditQuestion] = &[
    AuditQuestion {
        field: "Goal",
        question: "What are you primarily trying to improve right now?",
        hint: "Booked calls, lead quality, consistency, conversion, system reliability, or something else.",
        rows: 3,
        placeholder: "Describe your main objective...",
    },
    AuditQuestion {
        field: "Traffic Sources",
        question: "Where does attention currently come from?",
        hint: "Paid ads, organic social, referrals, search, email, partnerships, or no consistent source yet.",
        rows: 3,
        placeholder: "List your traffic sources...",
    },
    AuditQuestion {
        field: "Funnel Steps",
        question: "Walk us through what happens from first click or inquiry to booked call.",
        hint: "Be specific. Include pages, follow-ups, tools, and handoffs if possible.",
        rows: 4,
        placeholder: "Step-by-step process...",
    },
    AuditQuestion {
        field: "Pain Points",
        question: "What feels most broken, fragile, or frustrating in your current setup?",
        hint: "Leaks, wasted spend, poor lead quality, tech issues, vendor overlap, lack of ownership.",
        rows: 3,
        placeholder: "Key pain points...",
    },
    AuditQuestion {
        field: "Why Now",
        question: "Why are you looking at this now instead of later?",
        hint: "What changed? What pressure are you feeling? What prompted this review?",
        rows: 3,
        placeholder: "Context on timing...",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LeadKind;

    #[test]
    fn test_audit_questions_do_not_shadow_required_fields() {
        let required = LeadKind::GrowthAudit.required_fields();
        for q in AUDIT_QUESTIONS {
            assert!(!required.contains(&q.field), "{} is free text", q.field);
        }
        let mut names: Vec<_> = AUDIT_QUESTIONS.iter().map(|q| q.field).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AUDIT_QUESTIONS.len());
    }

    #[test]
    fn test_business_models_have_values() {
        assert!(!BUSINESS_MODELS.is_empty());
        assert!(BUSINESS_MODELS.iter().all(|(value, label)| !value.is_empty() && !label.is_empty()));
    }

    #[test]
    fn test_monthly_tiers_only_in_ongoing_group() {
        for group in PRICING_GROUPS {
            let monthly = group.tiers.iter().filter(|t| t.period.is_some()).count();
            if group.heading == "Ongoing Ownership" {
                assert_eq!(monthly, group.tiers.len());
            } else {
                assert_eq!(monthly, 0);
            }
        }
        assert!(ENTRY_TIER.period.is_none());
    }
}
