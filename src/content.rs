// Copy shown on the landing page.

pub const SITE_TITLE: &str = "Business English with David – Wrocław";

pub const HERO_BULLETS: [&str; 3] = [
    "1:1 or group classes",
    "Workshops for companies",
    "Online or on-site in Wrocław",
];

pub const CLIENTS: [&str; 6] = [
    "IDOM",
    "BigTime",
    "Primetric",
    "Waste Services",
    "ATL Polska",
    "English for Pilots",
];

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub topics: [&'static str; 4],
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "1:1 Business English",
        summary: "Focused sessions to fix your real situations: pronunciation coaching, confident calls, meeting language, negotiation phrases.",
        topics: [
            "Pronunciation & speech clarity",
            "Call confidence",
            "Interview prep",
            "Presentation coaching",
        ],
    },
    Service {
        title: "Group Classes",
        summary: "Teams learn faster together. Practical topics, role-plays, live correction, ready-to-use templates.",
        topics: ["Stand-ups", "Demos", "Status updates", "Cross-team comms"],
    },
    Service {
        title: "Company Workshops",
        summary: "Half-day or full-day intensives: Confident Calls, Presenting with Impact, Pronunciation & Annunciation, Pitching to Stakeholders.",
        topics: [
            "Pronunciation coaching",
            "Presentation skills",
            "Confident speaking",
            "Professional communication",
        ],
    },
];

pub const RESULTS: [&str; 4] = [
    "Clearer speech and pronunciation",
    "More confident calls and meetings",
    "Stronger presentation flow",
    "Better professional communication",
];

#[derive(Debug, PartialEq)]
pub struct CaseNote {
    pub client: &'static str,
    pub outcome: &'static str,
}

pub const CASE_NOTES: [CaseNote; 2] = [
    CaseNote {
        client: "Engineering firm",
        outcome: "One group + email workshop → faster approvals, fewer back-and-forths.",
    },
    CaseNote {
        client: "Startup",
        outcome: "Founder 1:1 + deck coaching → more confident investor calls.",
    },
];

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub date: &'static str,
    pub stars: usize,
    pub quote: &'static str,
}

impl Testimonial {
    pub fn star_line(&self) -> String {
        "★".repeat(self.stars)
    }
}

pub const REVIEW_SOURCE: &str = "e-korepetycje.pl";

pub const TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        author: "Artur",
        date: "17 lutego 2025",
        stars: 5,
        quote: "Zdecydowanie polecam Davida jako nauczyciela Business English. Jego profesjonalne podejście, połączone ze świetnym kontaktem z uczniem, tworzy idealne warunki do nauki. Zajęcia są zawsze dostosowane do indywidualnych potrzeb i poziomu klienta, co gwarantuje efektywność i postępy w nauce. David potrafi zmotywować i zainspirować do nauki, a jego zaangażowanie i pasja są zaraźliwe. Dzięki niemu nauka staje się przyjemnością i przynosi wymierne rezultaty. Polecam!",
    },
    Testimonial {
        author: "Zofia",
        date: "1 września 2024",
        stars: 5,
        quote: "Serdecznie polecam zajęcia z Davidem! Od ponad roku uczęszczam na korepetycje z języka angielskiego w zakresie negocjacji biznesowych i terminologii prawniczej prowadzone przez Davida i jestem głęboko usatysfakcjonowana efektami naszej współpracy. David to wyjątkowy nauczyciel, który z profesjonalizmem i zaangażowaniem prowadzi zajęcia. Jego metody dydaktyczne, umiejętność dopasowania tematów do indywidualnych zainteresowań oraz zaawansowanych potrzeb językowych uczniów, sprawiają, że każda lekcja jest nowym, ekscytującym doświadczeniem. Szczególnie cenię sobie atmosferę otwartości, którą David tworzy, co sprzyja płynnej i skutecznej nauce. Jego głęboka wiedza i kompetencje, w połączeniu z profesjonalnym podejściem, gwarantują, że materiał jest zawsze prezentowany w sposób klarowny i przystępny. Nie można także pomijać jego znakomitego poczucia humoru, które czyni każde spotkanie nie tylko okazją do doskonalenia języka, ale również świetną zabawą. Co więcej, David z łatwością buduje relacje oparte na zaufaniu i szacunku, co jest kluczowe w procesie edukacyjnym. Nauka angielskiego z Davidem to prawdziwa przyjemność. Bez względu na to, czy celujesz w doskonalenie swoich umiejętności językowych na poziomie zaawansowanym, potrzebujesz specjalistycznej wiedzy do prowadzenia negocjacji biznesowych, czy zaczynasz naukę od podstaw – David jest nauczycielem, którego szukasz. Z pełnym przekonaniem polecam!",
    },
];

#[derive(Debug, PartialEq)]
pub struct PriceTier {
    pub title: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    /// Quoted per engagement rather than booked directly.
    pub custom_quote: bool,
}

impl PriceTier {
    pub fn cta_label(&self) -> &'static str {
        if self.custom_quote {
            "Get quote"
        } else {
            "Book session"
        }
    }
}

pub const PRICING: [PriceTier; 3] = [
    PriceTier {
        title: "1:1",
        price: "from 180 zł",
        duration: "60 min",
        custom_quote: false,
    },
    PriceTier {
        title: "Group (2–6)",
        price: "from 50 zł",
        duration: "per person / 60–90 min",
        custom_quote: false,
    },
    PriceTier {
        title: "Workshops",
        price: "Custom",
        duration: "Half-day or full-day",
        custom_quote: true,
    },
];

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [FaqEntry; 6] = [
    FaqEntry {
        id: "faq-1",
        question: "Online or on-site?",
        answer: "Both. On-site in Wrocław; online everywhere.",
    },
    FaqEntry {
        id: "faq-2",
        question: "Do you teach exam prep?",
        answer: "Yes, I provide exam preparation alongside practical business communication.",
    },
    FaqEntry {
        id: "faq-3",
        question: "Do you assign homework?",
        answer: "Only useful tasks: rehearse a pitch, practice pronunciation, etc.",
    },
    FaqEntry {
        id: "faq-4",
        question: "Can you sign NDAs?",
        answer: "Yes.",
    },
    FaqEntry {
        id: "faq-5",
        question: "Do you work with beginners?",
        answer: "Lower-intermediate and up.",
    },
    FaqEntry {
        id: "faq-6",
        question: "Cancellation policy?",
        answer: "24 hours.",
    },
];
