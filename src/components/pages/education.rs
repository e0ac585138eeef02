//! Education page: courses and mentors

use crate::components::content::PageContent;
use crate::model::PageId;

pub fn content() -> PageContent {
    PageContent::new(
        "Education Hub",
        "Courses and mentorship for founders and investors",
    )
    .stat("Learning Modules", "50+", None)
    .stat("Expert Mentors", "100+", None)
    .stat("Students Enrolled", "10,000+", None)
    .stat("Satisfaction Rate", "95%", None)
    .heading("For Startups")
    .card_with(
        "Startup Fundamentals",
        "Learn the basics of building a successful startup from idea to MVP · 3 hours · 12 lessons",
        "Beginner",
    )
    .card_with(
        "Fundraising Mastery",
        "Complete guide to raising capital from seed to Series A · 5 hours · 18 lessons",
        "Intermediate",
    )
    .card_with(
        "Pitch Deck Perfection",
        "Create compelling pitch decks that win over investors · 2 hours · 8 lessons",
        "Beginner",
    )
    .heading("For Investors")
    .card_with(
        "Investment Fundamentals",
        "Essential knowledge for startup investing and portfolio management · 4 hours · 15 lessons",
        "Beginner",
    )
    .card_with(
        "Due Diligence Deep Dive",
        "Master the art of evaluating startup investments · 6 hours · 22 lessons",
        "Advanced",
    )
    .card_with(
        "Portfolio Management",
        "Build and manage a diversified startup investment portfolio · 3 hours · 14 lessons",
        "Intermediate",
    )
    .heading("Expert Mentors")
    .card_with(
        "Sarah Thompson",
        "Former VP of Engineering at Google · Tech Startups, Product Development · 150 sessions · 15+ years",
        "4.9★",
    )
    .card_with(
        "Michael Chen",
        "Serial Entrepreneur & Angel Investor · Fundraising, Business Strategy · 200 sessions · 20+ years",
        "5.0★",
    )
    .card_with(
        "Dr. Lisa Rodriguez",
        "Venture Partner at Andreessen Horowitz · Healthcare, Biotech Investments · 120 sessions · 12+ years",
        "4.8★",
    )
    .card_with(
        "James Wilson",
        "Former CFO at Stripe · Fintech, Financial Planning · 180 sessions · 18+ years",
        "4.9★",
    )
    .link("Enroll now", PageId::Register)
}
