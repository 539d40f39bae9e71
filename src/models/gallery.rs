//! Static content for the "What We Handle" expanding gallery.

use icondata::Icon;

/// Identifier of a gallery panel. Also its zero-based display position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u8);

impl PanelId {
    /// Two-digit ordinal shown in the panel corner ("01", "02", ...).
    pub fn ordinal(self) -> String {
        format!("{:02}", u16::from(self.0) + 1)
    }
}

/// One tile of the gallery.
#[derive(Clone, Copy)]
pub struct GalleryPanel {
    pub id: PanelId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub icon: Icon,
}

/// Panels in display order.
pub static TOOLKIT_PANELS: [GalleryPanel; 7] = [
    GalleryPanel {
        id: PanelId(0),
        title: "Landing Pages & Funnels",
        subtitle: "Conversion Architecture",
        description: "High-throughput pages designed to capture, qualify, and route leads without friction.",
        tags: &["Design", "Speed", "Frictionless"],
        image: "https://res.cloudinary.com/doalvffjs/image/upload/v1769597916/b7503d35-442c-43a1-af40-80aabcc190a6_0_1_grfwcf.webp",
        icon: icondata::LuGlobe,
    },
    GalleryPanel {
        id: PanelId(1),
        title: "Paid Acquisition",
        subtitle: "Meta & Google Ads",
        description: "Audience testing, creative iteration, and scaling rules tied to booked calls, not clicks.",
        tags: &["Scale", "Revenue", "Testing"],
        image: "https://pbs.twimg.com/media/GSNGKTRXcAAxIo6?format=jpg&name=large",
        icon: icondata::LuTarget,
    },
    GalleryPanel {
        id: PanelId(2),
        title: "Backend & CRM",
        subtitle: "Data Integrity",
        description: "Reliable data flows that keep leads, follow-ups, and attribution clean and consistent.",
        tags: &["Sync", "Clean", "Reliable"],
        image: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?q=80&w=2560&auto=format&fit=crop",
        icon: icondata::LuDatabase,
    },
    GalleryPanel {
        id: PanelId(3),
        title: "AI Automation",
        subtitle: "Workflow Orchestration",
        description: "Automations that handle routing, tagging, follow-ups, and internal handoffs instantly.",
        tags: &["Routing", "Speed", "Handoffs"],
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=2560&auto=format&fit=crop",
        icon: icondata::LuCpu,
    },
    GalleryPanel {
        id: PanelId(4),
        title: "Conversion Copy",
        subtitle: "Psychology & Messaging",
        description: "Clear, conversion-first messaging across pages, ads, and follow-ups used to sell.",
        tags: &["Clarity", "Persuasion", "Action"],
        image: "https://images.unsplash.com/photo-1455390582262-044cdead277a?q=80&w=2573&auto=format&fit=crop",
        icon: icondata::LuMessageSquare,
    },
    GalleryPanel {
        id: PanelId(5),
        title: "Advanced SEO",
        subtitle: "Organic Compounding",
        description: "Technical and content strategies designed to attract higher-intent traffic over time.",
        tags: &["Traffic", "Content", "Intent"],
        image: "https://images.unsplash.com/photo-1674027001834-719c347d1eca?q=80&w=2560&auto=format&fit=crop",
        icon: icondata::LuSearch,
    },
    GalleryPanel {
        id: PanelId(6),
        title: "AI Voice Callers",
        subtitle: "24/7 Qualification",
        description: "Automated qualification and booking for inbound leads that require human filtering.",
        tags: &["Voice", "Booking", "Scale"],
        image: "https://images.unsplash.com/photo-1761311985467-f95c26a80bcd?q=80&w=2670&auto=format&fit=crop",
        icon: icondata::LuZap,
    },
];
