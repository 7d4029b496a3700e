//! Static reference tables: sign → external article URL, one table per
//! UI variant. Configuration data, not logic.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::warn;
use url::Url;

use horoscope_core::ZodiacSign;

use crate::UiVariant;

/// A sign → URL lookup rendered as the "learn more" link block.
#[derive(Debug)]
pub struct ReferenceTable {
    entries: BTreeMap<ZodiacSign, Url>,
}

impl ReferenceTable {
    /// The table for a variant. Parsed once, on first use.
    #[must_use]
    pub fn for_variant(variant: UiVariant) -> &'static Self {
        match variant {
            UiVariant::Desktop => &DESKTOP,
            UiVariant::Mobile => &MOBILE,
        }
    }

    #[must_use]
    pub fn url(&self, sign: ZodiacSign) -> Option<&Url> {
        self.entries.get(&sign)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// An entry that fails to parse is skipped with a warning rather than
    /// taking the table down; the sign just loses its link block.
    fn from_raw(raw: &[(ZodiacSign, &str)]) -> Self {
        let mut entries = BTreeMap::new();
        for (sign, raw_url) in raw {
            match Url::parse(raw_url) {
                Ok(url) => {
                    entries.insert(*sign, url);
                }
                Err(err) => warn!(%sign, %err, "skipping invalid reference url"),
            }
        }
        Self { entries }
    }
}

static DESKTOP: LazyLock<ReferenceTable> =
    LazyLock::new(|| ReferenceTable::from_raw(DESKTOP_SOURCES));

static MOBILE: LazyLock<ReferenceTable> =
    LazyLock::new(|| ReferenceTable::from_raw(MOBILE_SOURCES));

const DESKTOP_SOURCES: &[(ZodiacSign, &str)] = &[
    (
        ZodiacSign::Virgo,
        "https://www.oecd.org/en/publications/government-at-a-glance-2025_0efd0bcd-en/full-report/green-public-procurement_5dbf73a9.html#indicator-d1e19503-94cb3dc3a1",
    ),
    (
        ZodiacSign::Libra,
        "https://www.wto.org/english/news_e/news25_e/gpro_18jun25_e.htm?utm",
    ),
    (
        ZodiacSign::Scorpio,
        "https://www.irena.org/Energy-Transition/Innovation/Offshore-Renewables",
    ),
    (
        ZodiacSign::Sagittarius,
        "https://www.eib.org/en/press/all/2025-177-cities-across-europe-plan-to-bolster-climate-action-and-social-infrastructure-eib-survey-shows?utm",
    ),
    (
        ZodiacSign::Capricorn,
        "https://decarbonization.unido.org/resources/harmonizing-reporting-for-green-public-procurement-and-green-building-programs-using-ecolabels-epds/",
    ),
    (
        ZodiacSign::Aquarius,
        "https://www.adb.org/news/adb-gsa-sign-deal-open-green-data-center-thailand",
    ),
    (
        ZodiacSign::Pisces,
        "https://environment.ec.europa.eu/news/commission-launches-consultation-upcoming-circular-economy-act-2025-08-01_en",
    ),
    (
        ZodiacSign::Aries,
        "https://www.worldbank.org/en/news/press-release/2025/08/05/mobilizing-access-to-the-digital-economy-alliance-africa?utm",
    ),
    (
        ZodiacSign::Taurus,
        "https://www.fao.org/americas/news/news-detail/programa-alimentacion-escolar/en?utm",
    ),
    (
        ZodiacSign::Gemini,
        "https://www.unops.org/news-and-stories/news/unlocking-the-power-of-public-procurement?utm",
    ),
    (
        ZodiacSign::Cancer,
        "https://www.who.int/news/item/26-07-2025-who-expands-guidance-on-sexually-transmitted-infections-and-reviews-country-progress-on-policy-implementation",
    ),
    (
        ZodiacSign::Leo,
        "https://energy.ec.europa.eu/topics/energy-security/eu-energy-and-raw-materials-platform_en",
    ),
];

const MOBILE_SOURCES: &[(ZodiacSign, &str)] = &[
    (
        ZodiacSign::Virgo,
        "https://www.wgea.org/news-events/un-acknowledges-the-role-of-supreme-audit-institutions-in-environmental-sustainability/?utm",
    ),
    (
        ZodiacSign::Libra,
        "https://procurementmag.com/news/albania-ai-procurement-minister",
    ),
    (
        ZodiacSign::Scorpio,
        "https://www.un.org/en/energy/page/Plan-of-Action-Towards-2025",
    ),
    (
        ZodiacSign::Sagittarius,
        "https://www.worldbank.org/en/news/press-release/2025/07/18/world-bank-group-strengthens-procurement-requirements-to-support-job-creation-skills-development?utm_source=chatgpt.com",
    ),
    (
        ZodiacSign::Capricorn,
        "https://www.unido.org/news/unido-development-dialogue-advances-global-efforts-productive-resilient-and-sustainable-supply-chains?utm_source=chatgpt.com",
    ),
    (
        ZodiacSign::Aquarius,
        "https://www.adb.org/news/adb-gsa-sign-deal-open-green-data-center-thailand",
    ),
    (
        ZodiacSign::Pisces,
        "https://bb-reg-net.org.uk/wp-content/uploads/2025/09/BB-REG-NET-Procurement-Paper.pdf",
    ),
    (
        ZodiacSign::Aries,
        "https://circularandfairictpact.com/news/new-manual-available-promoting-due-diligence/",
    ),
    (
        ZodiacSign::Taurus,
        "https://www.ucl.ac.uk/bartlett/publications/2025/sep/mission-oriented-approach-school-meals",
    ),
    (
        ZodiacSign::Gemini,
        "https://ghgprotocol.org/blog/release-iso-and-ghg-protocol-announce-strategic-partnership-deliver-unified-global-standards",
    ),
    (
        ZodiacSign::Cancer,
        "https://www.who.int/news/item/19-08-2025-theories-of-change-can-anchor-our-collective-efforts-and-trigger-real-change-in-people-s-lives",
    ),
    (
        ZodiacSign::Leo,
        "https://smartfreightcentre.org/en/about-sfc/news/smart-freight-centre-publishes-guide-to-unlocking-sustainable-aviation-fuel-for-cargo-decarbonization/",
    ),
];

// ─── Tests ─────────────────────────────────────────────────────────────────────
