//! Static content collections and the shared filter/paginate utility.
//!
//! DESIGN
//! ======
//! Blog posts, portfolio entries and services are fixed, statically
//! enumerated records. One pure `filter_page` function serves all three:
//! category match AND case-insensitive substring search over title, body
//! text and tags, then a clamped page slice. Category membership is the sole
//! partition key for the per-category counts shown as filter chips.

use serde::Serialize;

pub const PAGE_SIZE: usize = 6;

// =============================================================================
// BROWSING
// =============================================================================

/// A record the filter/paginator can browse.
pub trait Browsable {
    fn category(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn body(&self) -> &'static str;
    fn tags(&self) -> &'static [&'static str];
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryChip {
    pub id: &'static str,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PageResult<'a, T> {
    pub items: Vec<&'a T>,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

fn matches<T: Browsable>(item: &T, category: &str, search: &str) -> bool {
    if category != "all" && item.category() != category {
        return false;
    }
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    item.title().to_lowercase().contains(&needle)
        || item.body().to_lowercase().contains(&needle)
        || item.tags().iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Filter by category ("all" passes everything) and search term, then slice
/// out the requested page. The page index is clamped to the valid range;
/// page 1 of an empty result is an empty slice.
#[must_use]
pub fn filter_page<'a, T: Browsable>(
    items: &'a [T],
    category: &str,
    search: &str,
    page: usize,
    page_size: usize,
) -> PageResult<'a, T> {
    let filtered: Vec<&T> = items.iter().filter(|item| matches(*item, category, search)).collect();
    let total = filtered.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);
    let start = (page - 1) * page_size;
    let items = filtered.into_iter().skip(start).take(page_size).collect();
    PageResult { items, total, page, page_count }
}

/// Per-category counts for the filter chips, "all" first.
#[must_use]
pub fn category_chips<T: Browsable>(items: &[T], defs: &[(&'static str, &'static str)]) -> Vec<CategoryChip> {
    defs.iter()
        .map(|&(id, name)| CategoryChip {
            id,
            name,
            count: if id == "all" { items.len() } else { items.iter().filter(|i| i.category() == id).count() },
        })
        .collect()
}

/// Client-side browse state for a collection page.
///
/// Changing the category resets the page to 1; changing the search term does
/// NOT. The asymmetry is deliberate: category chips restart browsing, while
/// typing in the search box refines the page you are on.
#[derive(Debug, Clone)]
pub struct BrowseState {
    pub category: String,
    pub search: String,
    pub page: usize,
}

impl BrowseState {
    #[must_use]
    pub fn new() -> Self {
        Self { category: "all".to_owned(), search: String::new(), page: 1 }
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_owned();
        self.page = 1;
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_owned();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// BLOG
// =============================================================================

#[derive(Debug, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub views: u32,
    pub comments: u32,
    pub read_time: &'static str,
    pub featured: bool,
}

impl Browsable for BlogPost {
    fn category(&self) -> &'static str {
        self.category
    }
    fn title(&self) -> &'static str {
        self.title
    }
    fn body(&self) -> &'static str {
        self.excerpt
    }
    fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

pub const BLOG_CATEGORIES: [(&str, &str); 8] = [
    ("all", "All Posts"),
    ("hair-care", "Hair Care"),
    ("trends", "Trends"),
    ("styling", "Styling"),
    ("education", "Education"),
    ("diy", "DIY"),
    ("wedding", "Wedding"),
    ("seasonal", "Seasonal"),
];

pub const BLOG_POSTS: [BlogPost; 9] = [
    BlogPost {
        id: "1",
        title: "The Ultimate Guide to Hair Care Routines",
        excerpt: "Discover the secrets to maintaining healthy, beautiful hair with our comprehensive guide to daily hair care routines.",
        author: "Nina Moore",
        date: "2024-03-01",
        category: "hair-care",
        tags: &["hair-care", "routine", "healthy-hair", "tips"],
        image: "/images/blog/hair-care-routine.jpg",
        views: 1240,
        comments: 23,
        read_time: "8 min",
        featured: true,
    },
    BlogPost {
        id: "2",
        title: "Spring Hair Color Trends 2024",
        excerpt: "Explore the hottest hair color trends for spring 2024, from subtle balayage to bold fashion colors.",
        author: "Nina Moore",
        date: "2024-02-28",
        category: "trends",
        tags: &["trends", "color", "spring", "2024"],
        image: "/images/blog/spring-colors.jpg",
        views: 892,
        comments: 18,
        read_time: "6 min",
        featured: false,
    },
    BlogPost {
        id: "3",
        title: "How to Choose the Right Haircut for Your Face Shape",
        excerpt: "Learn how to select the perfect haircut that complements your unique face shape and enhances your best features.",
        author: "Nina Moore",
        date: "2024-02-25",
        category: "styling",
        tags: &["face-shape", "haircut", "styling", "tips"],
        image: "/images/blog/face-shape-guide.jpg",
        views: 1567,
        comments: 34,
        read_time: "10 min",
        featured: true,
    },
    BlogPost {
        id: "4",
        title: "Protecting Your Hair from Heat Damage",
        excerpt: "Essential tips and products to protect your hair from heat styling tools and maintain its health and shine.",
        author: "Nina Moore",
        date: "2024-02-20",
        category: "hair-care",
        tags: &["heat-protection", "styling", "hair-health", "products"],
        image: "/images/blog/heat-protection.jpg",
        views: 723,
        comments: 12,
        read_time: "5 min",
        featured: false,
    },
    BlogPost {
        id: "5",
        title: "The Science Behind Hair Growth",
        excerpt: "Understanding the hair growth cycle and what factors influence healthy hair growth and thickness.",
        author: "Nina Moore",
        date: "2024-02-15",
        category: "education",
        tags: &["hair-growth", "science", "education", "health"],
        image: "/images/blog/hair-growth.jpg",
        views: 945,
        comments: 21,
        read_time: "7 min",
        featured: false,
    },
    BlogPost {
        id: "6",
        title: "DIY Hair Masks for Every Hair Type",
        excerpt: "Natural and effective DIY hair mask recipes using ingredients you probably already have at home.",
        author: "Nina Moore",
        date: "2024-02-10",
        category: "diy",
        tags: &["diy", "hair-masks", "natural", "recipes"],
        image: "/images/blog/diy-masks.jpg",
        views: 1123,
        comments: 28,
        read_time: "6 min",
        featured: false,
    },
    BlogPost {
        id: "7",
        title: "Wedding Hair Inspiration: Timeless Styles",
        excerpt: "Elegant bridal hair ideas that will make you feel beautiful and confident on your special day.",
        author: "Nina Moore",
        date: "2024-02-05",
        category: "wedding",
        tags: &["wedding", "bridal", "elegant", "inspiration"],
        image: "/images/blog/wedding-hair.jpg",
        views: 1456,
        comments: 42,
        read_time: "9 min",
        featured: false,
    },
    BlogPost {
        id: "8",
        title: "Managing Curly Hair: Tips and Techniques",
        excerpt: "Expert advice on caring for and styling curly hair to enhance your natural texture and reduce frizz.",
        author: "Nina Moore",
        date: "2024-01-30",
        category: "styling",
        tags: &["curly-hair", "texture", "styling", "frizz"],
        image: "/images/blog/curly-hair.jpg",
        views: 834,
        comments: 19,
        read_time: "7 min",
        featured: false,
    },
    BlogPost {
        id: "9",
        title: "The Best Hair Products for Winter",
        excerpt: "Protect your hair from harsh winter weather with our recommended products and routines.",
        author: "Nina Moore",
        date: "2024-01-25",
        category: "seasonal",
        tags: &["winter", "products", "protection", "seasonal"],
        image: "/images/blog/winter-care.jpg",
        views: 678,
        comments: 15,
        read_time: "5 min",
        featured: false,
    },
];

// =============================================================================
// PORTFOLIO
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PortfolioItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub service: &'static str,
    pub before_image: &'static str,
    pub after_image: &'static str,
    pub client_name: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub tags: &'static [&'static str],
    pub testimonial: Option<&'static str>,
}

impl Browsable for PortfolioItem {
    fn category(&self) -> &'static str {
        self.category
    }
    fn title(&self) -> &'static str {
        self.title
    }
    fn body(&self) -> &'static str {
        self.description
    }
    fn tags(&self) -> &'static [&'static str] {
        self.tags
    }
}

pub const PORTFOLIO_CATEGORIES: [(&str, &str); 5] = [
    ("all", "All Work"),
    ("coloring", "Coloring"),
    ("styling", "Styling"),
    ("treatments", "Treatments"),
    ("special", "Special Events"),
];

pub const PORTFOLIO_ITEMS: [PortfolioItem; 9] = [
    PortfolioItem {
        id: "1",
        title: "Elegant Balayage Transformation",
        description: "Stunning balayage highlights that perfectly complement natural hair color",
        category: "coloring",
        service: "Balayage",
        before_image: "/images/portfolio/before-1.jpg",
        after_image: "/images/portfolio/after-1.jpg",
        client_name: "Sarah M.",
        rating: 5,
        date: "2024-01-15",
        tags: &["balayage", "highlights", "natural", "blonde"],
        testimonial: Some("I absolutely love my new look! The balayage is so natural and beautiful."),
    },
    PortfolioItem {
        id: "2",
        title: "Dramatic Color Correction",
        description: "Expert color correction from damaged blonde to healthy brunette",
        category: "coloring",
        service: "Color Correction",
        before_image: "/images/portfolio/before-2.jpg",
        after_image: "/images/portfolio/after-2.jpg",
        client_name: "Emily R.",
        rating: 5,
        date: "2024-01-20",
        tags: &["color-correction", "brunette", "healthy", "transformation"],
        testimonial: Some("My hair was saved! I can't believe how healthy and beautiful it looks now."),
    },
    PortfolioItem {
        id: "3",
        title: "Precision Pixie Cut",
        description: "Bold pixie cut with modern styling and texture",
        category: "styling",
        service: "Haircut & Styling",
        before_image: "/images/portfolio/before-3.jpg",
        after_image: "/images/portfolio/after-3.jpg",
        client_name: "Maya L.",
        rating: 5,
        date: "2024-01-25",
        tags: &["pixie", "short", "modern", "edgy"],
        testimonial: Some("I feel so confident and stylish with my new pixie cut!"),
    },
    PortfolioItem {
        id: "4",
        title: "Bridal Updo Elegance",
        description: "Romantic bridal updo with delicate curls and accessories",
        category: "special",
        service: "Wedding Styling",
        before_image: "/images/portfolio/before-4.jpg",
        after_image: "/images/portfolio/after-4.jpg",
        client_name: "Jessica K.",
        rating: 5,
        date: "2024-02-01",
        tags: &["bridal", "updo", "elegant", "romantic"],
        testimonial: Some("Perfect for my wedding day! I felt like a princess."),
    },
    PortfolioItem {
        id: "5",
        title: "Keratin Smoothing Treatment",
        description: "Frizz-free, smooth hair transformation with keratin treatment",
        category: "treatments",
        service: "Keratin Treatment",
        before_image: "/images/portfolio/before-5.jpg",
        after_image: "/images/portfolio/after-5.jpg",
        client_name: "Amanda T.",
        rating: 5,
        date: "2024-02-05",
        tags: &["keratin", "smooth", "frizz-free", "treatment"],
        testimonial: Some("My hair is so much more manageable now. I save so much time styling!"),
    },
    PortfolioItem {
        id: "6",
        title: "Vibrant Fashion Colors",
        description: "Bold fashion colors with professional color placement",
        category: "coloring",
        service: "Fashion Colors",
        before_image: "/images/portfolio/before-6.jpg",
        after_image: "/images/portfolio/after-6.jpg",
        client_name: "Zoe P.",
        rating: 5,
        date: "2024-02-10",
        tags: &["fashion-colors", "bold", "creative", "vibrant"],
        testimonial: Some("I love how creative and vibrant my hair looks! So unique!"),
    },
    PortfolioItem {
        id: "7",
        title: "Long Layer Cut",
        description: "Beautiful long layers with face-framing highlights",
        category: "styling",
        service: "Haircut & Styling",
        before_image: "/images/portfolio/before-7.jpg",
        after_image: "/images/portfolio/after-7.jpg",
        client_name: "Lisa H.",
        rating: 5,
        date: "2024-02-15",
        tags: &["long-layers", "highlights", "face-framing", "natural"],
        testimonial: Some("The layers add so much movement and life to my hair!"),
    },
    PortfolioItem {
        id: "8",
        title: "Curl Enhancement Treatment",
        description: "Natural curl enhancement with specialized treatments",
        category: "treatments",
        service: "Curl Treatment",
        before_image: "/images/portfolio/before-8.jpg",
        after_image: "/images/portfolio/after-8.jpg",
        client_name: "Maria S.",
        rating: 5,
        date: "2024-02-20",
        tags: &["curls", "enhancement", "natural", "defined"],
        testimonial: Some("My curls have never looked better! They're so defined and bouncy."),
    },
    PortfolioItem {
        id: "9",
        title: "Gradient Ombré",
        description: "Smooth ombré transition from dark to light",
        category: "coloring",
        service: "Ombré",
        before_image: "/images/portfolio/before-9.jpg",
        after_image: "/images/portfolio/after-9.jpg",
        client_name: "Rachel D.",
        rating: 5,
        date: "2024-02-25",
        tags: &["ombre", "gradient", "smooth", "transition"],
        testimonial: Some("The ombré is so seamless and beautiful. I get compliments everywhere!"),
    },
];

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub price_min: u32,
    pub price_max: Option<u32>,
    pub duration: &'static str,
    pub category: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Browsable for Service {
    fn category(&self) -> &'static str {
        self.category
    }
    fn title(&self) -> &'static str {
        self.name
    }
    fn body(&self) -> &'static str {
        self.short_description
    }
    fn tags(&self) -> &'static [&'static str] {
        &[]
    }
}

pub const SERVICE_CATEGORIES: [(&str, &str); 5] = [
    ("all", "All Services"),
    ("styling", "Styling"),
    ("coloring", "Coloring"),
    ("treatments", "Treatments"),
    ("special", "Special Events"),
];

pub const SERVICES: [Service; 6] = [
    Service {
        id: "haircut-styling",
        name: "Haircut & Styling",
        short_description: "Professional cut and style tailored to your face shape and lifestyle",
        description: "Our signature haircut and styling service combines precision cutting techniques with personalized styling to create a look that's uniquely you.",
        price_min: 85,
        price_max: Some(150),
        duration: "60-90 minutes",
        category: "styling",
        features: &[
            "Consultation and face shape analysis",
            "Precision cutting techniques",
            "Personalized styling",
            "Blow-dry and finish",
            "Hair care tips and maintenance advice",
        ],
        popular: true,
    },
    Service {
        id: "color-highlights",
        name: "Color & Highlights",
        short_description: "Full color services including highlights, lowlights, and color corrections",
        description: "Transform your look with our comprehensive color services. From subtle highlights to bold color transformations, our expert colorists use premium products to achieve stunning, long-lasting results.",
        price_min: 120,
        price_max: Some(300),
        duration: "2-4 hours",
        category: "coloring",
        features: &[
            "Color consultation and strand test",
            "Premium color products",
            "Foil highlights or balayage technique",
            "Toner application",
            "Color protection treatment",
            "Styling and finish",
        ],
        popular: true,
    },
    Service {
        id: "balayage",
        name: "Balayage",
        short_description: "Hand-painted highlights for a natural, sun-kissed look",
        description: "Our balayage technique creates beautiful, natural-looking highlights that grow out seamlessly. Perfect for those wanting a low-maintenance yet stunning look.",
        price_min: 180,
        price_max: Some(280),
        duration: "3-4 hours",
        category: "coloring",
        features: &[
            "Hand-painted technique",
            "Natural-looking results",
            "Low maintenance growth",
            "Customizable placement",
            "Toning for perfect shade",
            "Styling and finish",
        ],
        popular: false,
    },
    Service {
        id: "deep-conditioning",
        name: "Deep Conditioning Treatment",
        short_description: "Intensive treatment to restore moisture and shine to damaged hair",
        description: "Revitalize your hair with our deep conditioning treatments. Perfect for dry, damaged, or chemically treated hair.",
        price_min: 45,
        price_max: Some(85),
        duration: "45-60 minutes",
        category: "treatments",
        features: &[
            "Hair analysis and consultation",
            "Deep penetrating treatment",
            "Scalp massage",
            "Heat treatment for better absorption",
            "Moisture lock finish",
            "Take-home care recommendations",
        ],
        popular: false,
    },
    Service {
        id: "keratin-treatment",
        name: "Keratin Treatment",
        short_description: "Smoothing treatment to reduce frizz and add shine",
        description: "Our keratin treatment smooths the hair cuticle, reducing frizz and adding incredible shine. Perfect for unruly, frizzy, or damaged hair.",
        price_min: 200,
        price_max: Some(350),
        duration: "2-3 hours",
        category: "treatments",
        features: &[
            "Frizz reduction for up to 4 months",
            "Adds shine and smoothness",
            "Reduces drying time",
            "Improves hair manageability",
            "Safe for all hair types",
            "Aftercare instructions included",
        ],
        popular: false,
    },
    Service {
        id: "wedding-special",
        name: "Wedding & Special Events",
        short_description: "Bridal and special occasion hair styling services",
        description: "Make your special day perfect with our bridal and special event styling services. Trial sessions, day-of styling, and bridal party packages.",
        price_min: 150,
        price_max: Some(400),
        duration: "1-3 hours",
        category: "special",
        features: &[
            "Bridal consultation and trial",
            "Day-of styling service",
            "Bridal party packages available",
            "Long-lasting styles",
            "Touch-up kit provided",
            "Photography-ready finish",
        ],
        popular: true,
    },
];

/// Look up a service by identifier.
#[must_use]
pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
