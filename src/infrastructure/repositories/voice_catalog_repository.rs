use crate::domain::voice::{
    AgeBracket, Gender, VoiceCatalogRepository, VoiceCategory, VoiceRecord,
};
use std::sync::{Arc, LazyLock};

static VOICES: LazyLock<Arc<Vec<VoiceRecord>>> = LazyLock::new(|| {
    Arc::new(vec![
        VoiceRecord {
            id: "aarav".to_string(),
            name: "Aarav".to_string(),
            category: VoiceCategory::Narration,
            accent: "Indian".to_string(),
            language: "Hindi".to_string(),
            gender: Gender::Male,
            age: AgeBracket::MiddleAged,
            description: "Rich, unhurried baritone suited to long-form storytelling and audiobooks.".to_string(),
            tags: strings(&["Deep", "Warm", "Storyteller"]),
            use_cases: strings(&["audiobooks", "podcasts", "documentaries"]),
        },
        VoiceRecord {
            id: "meera".to_string(),
            name: "Meera".to_string(),
            category: VoiceCategory::Conversational,
            accent: "Indian".to_string(),
            language: "Hindi".to_string(),
            gender: Gender::Female,
            age: AgeBracket::Young,
            description: "Friendly everyday voice for assistants, explainers and customer support flows.".to_string(),
            tags: strings(&["Friendly", "Clear", "Upbeat"]),
            use_cases: strings(&["customer-support", "e-learning", "social-media"]),
        },
        VoiceRecord {
            id: "kabir".to_string(),
            name: "Kabir".to_string(),
            category: VoiceCategory::News,
            accent: "Indian".to_string(),
            language: "Hindi".to_string(),
            gender: Gender::Male,
            age: AgeBracket::MiddleAged,
            description: "Crisp bulletin delivery with steady pacing for headlines and reports.".to_string(),
            tags: strings(&["Authoritative", "Crisp", "Newsreader"]),
            use_cases: strings(&["news", "announcements"]),
        },
        VoiceRecord {
            id: "ananya".to_string(),
            name: "Ananya".to_string(),
            category: VoiceCategory::Educational,
            accent: "Indian".to_string(),
            language: "English".to_string(),
            gender: Gender::Female,
            age: AgeBracket::Young,
            description: "Patient and articulate, built for tutorials and classroom material.".to_string(),
            tags: strings(&["Patient", "Articulate", "Teacher"]),
            use_cases: strings(&["e-learning", "tutorials", "audiobooks"]),
        },
        VoiceRecord {
            id: "rohan".to_string(),
            name: "Rohan".to_string(),
            category: VoiceCategory::Advertisement,
            accent: "Indian".to_string(),
            language: "English".to_string(),
            gender: Gender::Male,
            age: AgeBracket::Young,
            description: "Energetic promo voice that makes short ad reads pop.".to_string(),
            tags: strings(&["Energetic", "Punchy", "Promo"]),
            use_cases: strings(&["ads", "social-media", "video"]),
        },
        VoiceRecord {
            id: "priya".to_string(),
            name: "Priya".to_string(),
            category: VoiceCategory::Meditation,
            accent: "Indian".to_string(),
            language: "English".to_string(),
            gender: Gender::Female,
            age: AgeBracket::MiddleAged,
            description: "Soft, breathy tone for guided meditation and sleep stories.".to_string(),
            tags: strings(&["Calm", "Soothing", "Soft"]),
            use_cases: strings(&["meditation", "wellness", "sleep-stories"]),
        },
        VoiceRecord {
            id: "vikram".to_string(),
            name: "Vikram".to_string(),
            category: VoiceCategory::Characters,
            accent: "Indian".to_string(),
            language: "Hindi".to_string(),
            gender: Gender::Male,
            age: AgeBracket::Old,
            description: "Gravelly elder with plenty of character for games and animation.".to_string(),
            tags: strings(&["Gravelly", "Wise", "Character"]),
            use_cases: strings(&["gaming", "animation", "audiobooks"]),
        },
        VoiceRecord {
            id: "lakshmi".to_string(),
            name: "Lakshmi".to_string(),
            category: VoiceCategory::Narration,
            accent: "Indian".to_string(),
            language: "Tamil".to_string(),
            gender: Gender::Female,
            age: AgeBracket::MiddleAged,
            description: "Expressive Tamil narrator for fiction and devotional content.".to_string(),
            tags: strings(&["Expressive", "Warm", "Narrator"]),
            use_cases: strings(&["audiobooks", "podcasts"]),
        },
        VoiceRecord {
            id: "arjun".to_string(),
            name: "Arjun".to_string(),
            category: VoiceCategory::Conversational,
            accent: "Indian".to_string(),
            language: "Tamil".to_string(),
            gender: Gender::Male,
            age: AgeBracket::Young,
            description: "Casual Tamil voice for reels, vlogs and app prompts.".to_string(),
            tags: strings(&["Casual", "Bright"]),
            use_cases: strings(&["social-media", "video", "customer-support"]),
        },
        VoiceRecord {
            id: "ishita".to_string(),
            name: "Ishita".to_string(),
            category: VoiceCategory::News,
            accent: "Indian".to_string(),
            language: "Bengali".to_string(),
            gender: Gender::Female,
            age: AgeBracket::MiddleAged,
            description: "Measured Bengali newsreader with clean diction.".to_string(),
            tags: strings(&["Measured", "Clear", "Newsreader"]),
            use_cases: strings(&["news", "announcements"]),
        },
        VoiceRecord {
            id: "sagar".to_string(),
            name: "Sagar".to_string(),
            category: VoiceCategory::Educational,
            accent: "Indian".to_string(),
            language: "Marathi".to_string(),
            gender: Gender::Male,
            age: AgeBracket::MiddleAged,
            description: "Steady Marathi explainer voice for courses and training.".to_string(),
            tags: strings(&["Steady", "Informative"]),
            use_cases: strings(&["e-learning", "tutorials"]),
        },
        VoiceRecord {
            id: "nandini".to_string(),
            name: "Nandini".to_string(),
            category: VoiceCategory::Advertisement,
            accent: "Indian".to_string(),
            language: "Telugu".to_string(),
            gender: Gender::Female,
            age: AgeBracket::Young,
            description: "Bright Telugu voice for jingles, promos and launches.".to_string(),
            tags: strings(&["Bright", "Energetic", "Promo"]),
            use_cases: strings(&["ads", "video"]),
        },
        VoiceRecord {
            id: "james".to_string(),
            name: "James".to_string(),
            category: VoiceCategory::Narration,
            accent: "British".to_string(),
            language: "English".to_string(),
            gender: Gender::Male,
            age: AgeBracket::Old,
            description: "Classic British narrator with a velvety, measured read.".to_string(),
            tags: strings(&["Velvety", "Classic", "Audiobook Narrator"]),
            use_cases: strings(&["audiobooks", "documentaries"]),
        },
        VoiceRecord {
            id: "olivia".to_string(),
            name: "Olivia".to_string(),
            category: VoiceCategory::News,
            accent: "British".to_string(),
            language: "English".to_string(),
            gender: Gender::Female,
            age: AgeBracket::MiddleAged,
            description: "Polished broadcast voice for bulletins and corporate updates.".to_string(),
            tags: strings(&["Polished", "Broadcast"]),
            use_cases: strings(&["news", "corporate"]),
        },
        VoiceRecord {
            id: "ethan".to_string(),
            name: "Ethan".to_string(),
            category: VoiceCategory::Conversational,
            accent: "American".to_string(),
            language: "English".to_string(),
            gender: Gender::Male,
            age: AgeBracket::Young,
            description: "Relaxed American voice for podcasts and chatty explainers.".to_string(),
            tags: strings(&["Relaxed", "Natural"]),
            use_cases: strings(&["podcasts", "social-media", "customer-support"]),
        },
        VoiceRecord {
            id: "sophia".to_string(),
            name: "Sophia".to_string(),
            category: VoiceCategory::Advertisement,
            accent: "American".to_string(),
            language: "English".to_string(),
            gender: Gender::Female,
            age: AgeBracket::Young,
            description: "Confident commercial read with a warm smile in the voice.".to_string(),
            tags: strings(&["Confident", "Warm", "Commercial"]),
            use_cases: strings(&["ads", "video", "corporate"]),
        },
        VoiceRecord {
            id: "marcus".to_string(),
            name: "Marcus".to_string(),
            category: VoiceCategory::Characters,
            accent: "American".to_string(),
            language: "English".to_string(),
            gender: Gender::Male,
            age: AgeBracket::MiddleAged,
            description: "Larger-than-life trailer and villain voice.".to_string(),
            tags: strings(&["Dramatic", "Deep", "Trailer"]),
            use_cases: strings(&["gaming", "animation", "video"]),
        },
        VoiceRecord {
            id: "grace".to_string(),
            name: "Grace".to_string(),
            category: VoiceCategory::Meditation,
            accent: "Australian".to_string(),
            language: "English".to_string(),
            gender: Gender::Female,
            age: AgeBracket::MiddleAged,
            description: "Gentle Australian voice for mindfulness and relaxation.".to_string(),
            tags: strings(&["Gentle", "Calm"]),
            use_cases: strings(&["meditation", "wellness"]),
        },
        VoiceRecord {
            id: "lucas".to_string(),
            name: "Lucas".to_string(),
            category: VoiceCategory::Educational,
            accent: "Australian".to_string(),
            language: "English".to_string(),
            gender: Gender::Male,
            age: AgeBracket::Young,
            description: "Upbeat science-communicator voice for explainers.".to_string(),
            tags: strings(&["Upbeat", "Curious"]),
            use_cases: strings(&["e-learning", "video", "tutorials"]),
        },
        VoiceRecord {
            id: "valentina".to_string(),
            name: "Valentina".to_string(),
            category: VoiceCategory::Narration,
            accent: "Latin American".to_string(),
            language: "Spanish".to_string(),
            gender: Gender::Female,
            age: AgeBracket::MiddleAged,
            description: "Warm Latin American storyteller for fiction and podcasts.".to_string(),
            tags: strings(&["Warm", "Expressive", "Storyteller"]),
            use_cases: strings(&["audiobooks", "podcasts"]),
        },
        VoiceRecord {
            id: "diego".to_string(),
            name: "Diego".to_string(),
            category: VoiceCategory::SocialMedia,
            accent: "Castilian".to_string(),
            language: "Spanish".to_string(),
            gender: Gender::Male,
            age: AgeBracket::Young,
            description: "Fast, playful voice tuned for short-form social clips.".to_string(),
            tags: strings(&["Playful", "Fast"]),
            use_cases: strings(&["social-media", "video", "ads"]),
        },
        VoiceRecord {
            id: "zara".to_string(),
            name: "Zara".to_string(),
            category: VoiceCategory::SocialMedia,
            accent: "Indian".to_string(),
            language: "Hindi".to_string(),
            gender: Gender::Female,
            age: AgeBracket::Young,
            description: "Trendy Hinglish voice for reels, shorts and influencer content.".to_string(),
            tags: strings(&["Trendy", "Hinglish", "Upbeat"]),
            use_cases: strings(&["social-media", "ads"]),
        },
        VoiceRecord {
            id: "robo".to_string(),
            name: "Robo".to_string(),
            category: VoiceCategory::Characters,
            accent: "Neutral".to_string(),
            language: "English".to_string(),
            gender: Gender::Neutral,
            age: AgeBracket::Young,
            description: "Synthetic robot voice for sci-fi games and playful alerts.".to_string(),
            tags: strings(&["Robotic", "Quirky", "Character"]),
            use_cases: strings(&["gaming", "animation"]),
        },
        VoiceRecord {
            id: "dadi".to_string(),
            name: "Dadi".to_string(),
            category: VoiceCategory::Characters,
            accent: "Indian".to_string(),
            language: "Hindi".to_string(),
            gender: Gender::Female,
            age: AgeBracket::Old,
            description: "Affectionate grandmother voice for bedtime tales and kids' content.".to_string(),
            tags: strings(&["Affectionate", "Storyteller", "Grandmother"]),
            use_cases: strings(&["sleep-stories", "animation", "audiobooks"]),
        },
    ])
});

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Voice catalog compiled into the binary
#[derive(Debug, Clone, Default)]
pub struct StaticVoiceCatalogRepository;

impl StaticVoiceCatalogRepository {
    pub fn new() -> Self {
        Self
    }
}

impl VoiceCatalogRepository for StaticVoiceCatalogRepository {
    fn all_voices(&self) -> Vec<VoiceRecord> {
        VOICES.as_ref().clone()
    }
}
