//! The hand-authored rule tables
//!
//! Fixed six-month task content per rule branch. The default table is
//! content-identical to the student table; that is long-standing authored
//! behavior, not an accident to correct.

use launchpath_model::{Roadmap, RoadmapMonth};

/// Study-permit, low-income table
pub(crate) fn student_table() -> Roadmap {
    Roadmap::new(vec![
        RoadmapMonth::new(
            1,
            "Open a no-fee student bank account",
            &[
                "Visit RBC or TD branch with passport and study permit",
                "Open chequing account",
                "Request a debit card",
            ],
        ),
        RoadmapMonth::new(
            2,
            "Apply for the Scotiabank Scene+ Secured Visa",
            &[
                "Apply online at scotiabank.com",
                "Transfer $300 as security deposit",
                "Set up autopay for minimum payment",
            ],
        ),
        RoadmapMonth::new(
            3,
            "Put one small recurring charge on the card",
            &[
                "Add card to Spotify or Netflix subscription",
                "Confirm the charge posts to your card",
                "Check that autopay is still active",
            ],
        ),
        RoadmapMonth::new(
            4,
            "Pull your free credit reports",
            &[
                "Request report from Equifax Canada at equifax.ca (free)",
                "Request report from TransUnion Canada at transunion.ca (free)",
                "Check that your secured card is listed on both",
            ],
        ),
        RoadmapMonth::new(
            5,
            "Add KOHO's credit building feature",
            &[
                "Download KOHO app and sign up (free)",
                "Add Credit Building add-on ($7/month)",
                "Keep utilization on Scotia card under 10%",
            ],
        ),
        RoadmapMonth::new(
            6,
            "Check your score",
            &[
                "Check score via Borrowell (free)",
                "If above 640 apply for Home Trust Preferred Visa",
                "If below 640 continue current plan for 3 more months",
            ],
        ),
    ])
}

/// Work-permit, mid-to-high-income table
pub(crate) fn work_permit_table() -> Roadmap {
    Roadmap::new(vec![
        RoadmapMonth::new(
            1,
            "Open an RBC Newcomer account & Secured Visa",
            &[
                "Visit RBC with work permit and proof of income",
                "Open chequing account",
                "Apply for RBC Secured Visa ($1,000 deposit recommended)",
            ],
        ),
        RoadmapMonth::new(
            2,
            "Apply for a credit-builder loan",
            &[
                "Find nearest Meridian, Desjardins, or Vancity branch",
                "Apply for a $1,000–$2,000 credit-builder loan",
                "Confirm monthly payment amount and set up autopay",
            ],
        ),
        RoadmapMonth::new(
            3,
            "Set everything to autopay",
            &[
                "Verify both the card and loan appear on your Equifax report",
                "Set full autopay on the RBC card (not just minimum)",
                "Set autopay on credit-builder loan",
            ],
        ),
        RoadmapMonth::new(
            4,
            "Open a second secured card",
            &[
                "Apply for Home Trust Secured Visa or Tangerine Money-Back card",
                "Keep both cards under 15% utilization",
                "Do not close the first card",
            ],
        ),
        RoadmapMonth::new(
            5,
            "Request a credit limit increase",
            &[
                "Call RBC or request online after 6 months",
                "Do not let them do a hard pull if possible (ask for soft pull)",
                "If denied, wait 3 more months",
            ],
        ),
        RoadmapMonth::new(
            6,
            "Apply for a rewards credit card",
            &[
                "Check score on Borrowell or Credit Karma Canada",
                "If above 660 apply for Tangerine World Mastercard or PC Financial Mastercard",
                "Set up one recurring bill on the new card",
            ],
        ),
    ])
}

/// Permanent-resident / citizen table, income independent
pub(crate) fn established_table() -> Roadmap {
    Roadmap::new(vec![
        RoadmapMonth::new(
            1,
            "Leverage Newcomer Programs",
            &[
                "Visit TD or RBC and mention you are a new PR",
                "Apply for TD Newcomer Program or RBC Newcomer Advantage",
                "Apply for secured card same day",
            ],
        ),
        RoadmapMonth::new(
            2,
            "Stack a credit-builder loan",
            &[
                "Apply for credit-builder loan at Desjardins or Meridian",
                "This creates two tradelines reporting simultaneously",
                "Set autopay on both",
            ],
        ),
        RoadmapMonth::new(
            3,
            "Add a retail credit account",
            &[
                "Apply for Canadian Tire Triangle Mastercard (easiest approval)",
                "Use it for one purchase per month",
                "Pay in full immediately",
            ],
        ),
        RoadmapMonth::new(
            4,
            "Request limit increases",
            &[
                "Request limit increase on secured card",
                "If Canadian Tire card has good standing request increase there too",
                "Keep overall utilization under 10%",
            ],
        ),
        RoadmapMonth::new(
            5,
            "Check both bureaus and dispute errors",
            &[
                "Pull Equifax and TransUnion reports",
                "Look for any accounts listed incorrectly",
                "File a dispute online if anything is wrong",
            ],
        ),
        RoadmapMonth::new(
            6,
            "Apply for a proper rewards card",
            &[
                "Check score — PR holders often hit 680–720 by month 6",
                "Apply for Scotiabank Gold Amex or TD Cash Back Visa",
                "Consider converting secured card to unsecured if offered",
            ],
        ),
    ])
}

/// Fallback for unmatched answer combinations
///
/// Content-identical to [`student_table`].
pub(crate) fn default_table() -> Roadmap {
    student_table()
}
