//! Static local knowledge used when no provider succeeds. Topics are scanned
//! in declared order; the first key contained in the lowercased query wins.

pub struct Topic {
    /// Match keys, most specific first. Containment is checked against the
    /// lowercased query.
    pub keys: &'static [&'static str],
    pub en: &'static str,
    pub sn: &'static str,
}

impl Topic {
    fn text(&self, lang: &str) -> &'static str {
        if lang == "sn" {
            self.sn
        } else {
            self.en
        }
    }
}

pub const TOPICS: &[Topic] = &[
    Topic {
        keys: &["maize yellow leaves", "yellow leaves", "leaves are yellow", "yellow"],
        en: YELLOW_LEAVES_EN,
        sn: YELLOW_LEAVES_SN,
    },
    Topic {
        keys: &["fall armyworm treatment", "fall armyworm", "armyworm"],
        en: ARMYWORM_EN,
        sn: ARMYWORM_SN,
    },
];

/// First-containment-match lookup over the topic table. Returns `None` when
/// no key matches; callers fall through to [`default_response`].
pub fn lookup(query: &str, lang: &str) -> Option<&'static str> {
    let query_lower = query.to_lowercase();
    for topic in TOPICS {
        if topic.keys.iter().any(|key| query_lower.contains(key)) {
            return Some(topic.text(lang));
        }
    }
    None
}

/// Canned answer for a query: the matching topic text, or the generic
/// "working on it" response when nothing matches.
pub fn local_solution(query: &str, lang: &str) -> String {
    lookup(query, lang)
        .unwrap_or_else(|| default_response(lang))
        .to_string()
}

pub fn default_response(lang: &str) -> &'static str {
    if lang == "sn" {
        DEFAULT_SN
    } else {
        DEFAULT_EN
    }
}

/// Shown when credentials are missing or placeholders; a pure function of
/// the language tag, never of the query.
pub fn configuration_help(lang: &str) -> &'static str {
    if lang == "sn" {
        CONFIG_HELP_SN
    } else {
        CONFIG_HELP_EN
    }
}

const YELLOW_LEAVES_EN: &str = r#"**🚀 COMPLETE Maize Yellow Leaves Solution**

**🎯 Problem Analysis**
Yellow leaves indicate nutrient deficiency or disease. Common in Zimbabwe during rainy season.

**🚀 Immediate Actions**
• Apply 200kg/ha Ammonium Nitrate as top dressing
• Spray with Zinc sulfate (2kg/ha) if interveinal chlorosis
• Remove severely infected plants

**📋 Step-by-Step Plan**
1. Test soil pH (target: 5.5-6.5)
2. Apply Nitrogen fertilizer immediately
3. Monitor for 7 days
4. Apply fungicide if spots appear

**💊 Recommended Products**
• Ammonium Nitrate (200kg/ha)
• Zinc sulfate (2kg/ha)
• Mancozeb fungicide if fungal

**🌱 Long-term Prevention**
• Soil testing before planting
• Crop rotation with legumes
• Use SC727 resistant variety

**📞 Local Support**
• Agro-dealers: All towns
• Extension officers: District offices"#;

const YELLOW_LEAVES_SN: &str = r#"**🚀 Mhinduro Yakazara YeMashizha Yero Echibage**

**🎯 Ongororo Yedambudziko**
Mashizha yero anoratidza kushaikwa kwefetireza kana chirwere. Zvinowanzoitika muZimbabwe munguva yemvura.

**🚀 Zvekuita Ipapo**
• Isa 200kg/ha Ammonium Nitrate se top dressing
• Spray neZinc sulfate (2kg/ha) kana uine interveinal chlorosis
• Bvisa zvirimwa zvakabatwa zvakanyanya

**📋 Nzira Yekuita**
1. Ongorora pH yevhu (inofanirwa kuva 5.5-6.5)
2. Isa Nitrogen fertilizer ipapo
3. Tarisa kwemazuva 7
4. Isa fungicide kana mavanga aonekwa

**💊 Zvinhu Zvinokurudzirwa**
• Ammonium Nitrate (200kg/ha)
• Zinc sulfate (2kg/ha)
• Mancozeb fungicide kana uine fungal

**🌱 Kudzivirira Kwenguva Refu**
• Ongorora ivhu usati warima
• Shandura chirimwa nenyemba
• Shandisa mhando yeSC727 inorwisa zvirwere"#;

const ARMYWORM_EN: &str = r#"**🚀 COMPLETE Fall Armyworm Eradication**

**🎯 Problem Analysis**
Fall Armyworm can destroy 100% of maize crop if untreated. Most destructive pest in Zimbabwe.

**🚀 Emergency Treatment**
• Spray Emamectin benzoate (0.5L/ha) immediately
• Apply at dawn/dusk when larvae are active
• Repeat after 7 days

**📋 Action Plan**
1. Scout field daily for eggs/larvae
2. Apply insecticide immediately upon detection
3. Use pheromone traps for monitoring
4. Remove and destroy infected plants

**💊 Recommended Products**
• Emamectin benzoate (Affirm 0.5L/ha)
• Chlorantraniliprole (Coragen 0.3L/ha)
• Lambda-cyhalothrin (Karate Zeon 0.4L/ha)

**🌱 Prevention Strategy**
• Early planting (Oct-Nov)
• Use push-pull technology
• Biological control (NPV virus)

**📞 Emergency Contacts**
• Local agro-dealers for emergency supplies
• Agriculture extension for large infestations"#;

const ARMYWORM_SN: &str = r#"**🚀 Kupedza Fall Armyworm**

**🎯 Ongororo Yedambudziko**
Fall Armyworm inogona kuparadza 100% yechibage kana isina kurapwa. Chipukanana chinoparadza zvikuru muZimbabwe.

**🚀 Mushonga Wekukurumidza**
• Spray Emamectin benzoate (0.5L/ha) ipapo
• Isa mangwanani/madekwana kana magonye achishanda
• Dzokorora mushure memazuva 7

**📋 Nzira Yekuita**
1. Ongorora munda mazuva ese kuti uone mazai/magonye
2. Isa insecticide paunoona
3. Shandisa pheromone traps yekutarisa
4. Bvisa uye paradza zvirimwa zvakabatwa

**💊 Zvinhu Zvinokurudzirwa**
• Emamectin benzoate (Affirm 0.5L/ha)
• Chlorantraniliprole (Coragen 0.3L/ha)
• Lambda-cyhalothrin (Karate Zeon 0.4L/ha)

**🌱 Kudzivirira**
• Kurima kwepamberi (Gumiguru-Mbudzi)
• Shandisa push-pull technology
• Biological control (NPV virus)"#;

const DEFAULT_EN: &str = r#"**🚀 MundaX AI Working On Your Solution**

We're optimizing our AI systems. Meanwhile, please:

**Examples of Successful Questions:**
• "My maize leaves are yellow with spots, what should I do?"
• "Fall armyworm has invaded my primary field, what's the treatment?"
• "How do I use Ammonium Nitrate for maize?"
• "My tobacco has blue mold, what's the solution?"

**For Best Results:**
1. Describe your problem completely
2. Specify the crop
3. List symptoms
4. Mention when it started"#;

const DEFAULT_SN: &str = r#"**🚀 MundaX AI Inoshanda Kukupai Mhinduro**

Tiri kugadzirisa system yedu yeAI. Panguva ino, ndapota:

**Mienzaniso Yemibvunzo Inobudirira:**
• "Mashizha echibage angu ave yero nemavanga, ndoita sei?"
• "Fall armyworm yauya mumunda wangu wepuraimari, chii chinonzi mushonga?"
• "Ndingashandisa sei Ammonium Nitrate pachibage?"
• "Fodya yangu ine blue mold, ndoita sei?"

**Kuti tiwane mhinduro chaiyo:**
1. Tsanangura dambudziko rako zvizere
2. Taura chirimwa chacho
3. Taura zviratidzo
4. Taura nguva yazvatanga"#;

const CONFIG_HELP_EN: &str = r#"**🚀 MundaX Multi-AI Setup Needed**

Add your API keys before asking questions. Three systems work together:
• DeepSeek AI
• OpenAI ChatGPT
• Google Gemini AI

Run the setup flow (or set the MUNDAX_*_API_KEY variables) and ask again.

*Responses will be deep, comprehensive, and highly practical!*"#;

const CONFIG_HELP_SN: &str = r#"**🚀 MundaX Multi-AI Inoda Kugadzirirwa**

Isa maAPI keys ako usati wabvunza. Masystem matatu anoshanda pamwe:
• DeepSeek AI
• OpenAI ChatGPT
• Google Gemini AI

Mhanyisa setup (kana kuisa maMUNDAX_*_API_KEY variables) wozobvunza zvakare.

*Mhinduro dzichava dzakadzama, dzakazara, uye dzinoshanda chaizvo!*"#;
