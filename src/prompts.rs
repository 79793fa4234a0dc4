//! Prompt Composer — produces the exact ordered conversation for each
//! use case, and nothing else. Validation failures here are caller-input
//! errors and fail fast, before any network call.

use crate::models::{
    AnalysisRequest, Conversation, ConversationMessage, HealthProfile, Locale,
};
use crate::profile_context;

/// Plant identification accepts between 1 and this many images.
pub const MAX_PLANT_IMAGES: usize = 3;

/// Caller-supplied input violated a precondition.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Message is required")]
    EmptyMessage,
    #[error("Symptoms are required")]
    NoSymptoms,
    #[error("Between 1 and {MAX_PLANT_IMAGES} images are required, got {0}")]
    ImageCount(usize),
    #[error("{0} is required")]
    MissingInput(&'static str),
}

// ═══════════════════════════════════════════════════════════
// System instructions
// ═══════════════════════════════════════════════════════════

const CHAT_SYSTEM: &str = "\
You are a helpful health and medicinal plant assistant. You provide:
- Information about symptoms and diseases
- Medicinal plant knowledge
- Herbal remedy suggestions
- General wellness advice

Guidelines:
- Always include medical disclaimers
- Recommend professional medical help for serious conditions
- Be empathetic and supportive
- Provide evidence-based information
- Keep responses concise (2-3 paragraphs max)
- Use simple, non-technical language

Never:
- Provide definitive diagnoses
- Prescribe medications
- Replace professional medical advice";

const SYMPTOM_SYSTEM: &str = "\
You are a helpful medical AI assistant specializing in symptom analysis and \
natural remedies. Always include medical disclaimers and recommend \
professional consultation for serious conditions.";

const PLANT_SYSTEM: &str = "\
You are a botanical expert specializing in medicinal plants. Provide \
accurate identification and comprehensive medicinal information.";

// ═══════════════════════════════════════════════════════════
// Composers
// ═══════════════════════════════════════════════════════════

/// Open-ended chat: fixed system instruction, prior history in append
/// order (reasoning details carried through), new user message last.
pub fn chat(
    history: &[ConversationMessage],
    message: &str,
) -> Result<Conversation, PromptError> {
    if message.trim().is_empty() {
        return Err(PromptError::EmptyMessage);
    }

    let mut conversation = Vec::with_capacity(history.len() + 2);
    conversation.push(ConversationMessage::system(CHAT_SYSTEM));
    conversation.extend(history.iter().cloned());
    conversation.push(ConversationMessage::user(message));
    Ok(conversation)
}

/// Symptom analysis: a single user message carrying the symptom list,
/// optional follow-up answers, the profile annex and the full output
/// schema, under the fixed symptom-analysis system instruction.
pub fn symptom_analysis(request: &AnalysisRequest) -> Result<Conversation, PromptError> {
    let symptoms: Vec<&str> = request
        .symptoms
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if symptoms.is_empty() {
        return Err(PromptError::NoSymptoms);
    }

    let follow_up = match &request.follow_up_answers {
        Some(answers) if !answers.is_null() => format!(
            "Additional information: {}\n",
            serde_json::to_string(answers).unwrap_or_default()
        ),
        _ => String::new(),
    };

    let profile = request.user_profile.clone().unwrap_or_default();
    let annex = profile_context::symptom_annex(&profile);

    let prompt = format!(
        "You are a medical AI assistant. Analyze the following symptoms and \
         provide a detailed health assessment.\n\n\
         Symptoms: {}\n\
         {}{}\n\
         Provide your response in the following JSON format (ensure all text is in {}):\n\
         {{\n\
           \"diseases\": [\n\
             {{\n\
               \"name\": \"Disease name\",\n\
               \"confidence\": 0-100,\n\
               \"reasoning\": \"Why this disease is likely based on symptoms\",\n\
               \"riskLevel\": \"low|moderate|high|emergency\",\n\
               \"profileAnalysis\": {{\n\
                 \"matchScore\": \"High/Medium/Low\",\n\
                 \"explanation\": \"Specific reason why this matches the user's profile (e.g., 'Your history of Asthma makes this more likely...')\"\n\
               }},\n\
               \"recommendedPlants\": [\"Plant 1\", \"Plant 2\"],\n\
               \"remedies\": [\"Remedy 1\", \"Remedy 2\"],\n\
               \"preventiveMeasures\": [\"Measure 1\", \"Measure 2\"],\n\
               \"diet\": [\"Food 1\", \"Food 2\"],\n\
               \"exercises\": [\"Exercise 1\", \"Exercise 2\"]\n\
             }}\n\
           ],\n\
           \"followUpQuestions\": [\"Question 1?\", \"Question 2?\"],\n\
           \"generalAdvice\": \"Overall health advice. Include specific warnings if user's profile conflicts with recommendations.\"\n\
         }}\n\n\
         Return top 5 most probable diseases. Include a medical disclaimer.",
        symptoms.join(", "),
        follow_up,
        annex,
        request.language.language_name(),
    );

    Ok(vec![
        ConversationMessage::system(SYMPTOM_SYSTEM),
        ConversationMessage::user(prompt),
    ])
}

/// Plant identification: instructional text (schema + safety annex) plus
/// 1-3 image attachments in submission order.
pub fn plant_identification(
    image_urls: Vec<String>,
    profile: Option<&HealthProfile>,
    locale: Locale,
) -> Result<Conversation, PromptError> {
    if image_urls.is_empty() || image_urls.len() > MAX_PLANT_IMAGES {
        return Err(PromptError::ImageCount(image_urls.len()));
    }

    let annex = profile
        .map(profile_context::plant_safety_annex)
        .unwrap_or_default();

    let prompt = format!(
        "Identify this plant from the image and provide detailed medicinal information.\n\
         {}\n\
         Provide the response in the following JSON format (ensure all text is in {}):\n\
         {{\n\
           \"plantName\": \"Common Name\",\n\
           \"scientificName\": \"Scientific Name\",\n\
           \"confidence\": 0.0-1.0,\n\
           \"identificationReasoning\": \"Brief explanation of visual features\",\n\
           \"medicinalBenefits\": [\"Benefit 1\", \"Benefit 2\"],\n\
           \"treatsConditions\": [\"Condition 1\", \"Condition 2\"],\n\
           \"preparation\": [\"Prep method 1\", \"Prep method 2\"],\n\
           \"dosage\": \"Recommended dosage\",\n\
           \"sideEffects\": [\"Side effect 1\", \"Side effect 2\"],\n\
           \"warnings\": [\"General warning 1\", \"General warning 2\"],\n\
           \"profileWarning\": {{\n\
             \"hasWarning\": boolean,\n\
             \"type\": \"Allergy\" | \"Interaction\" | \"Condition\" | \"None\",\n\
             \"severity\": \"High\" | \"Moderate\" | \"Low\" | \"None\",\n\
             \"description\": \"Specific warning based on user profile. E.g., 'DANGEROUS: You are taking Warfarin, and this plant contains Vitamin K...'\",\n\
             \"action\": \"What the user should do (e.g., 'Avoid completely')\"\n\
           }},\n\
           \"alternativePlants\": [\"Alt Plant 1\", \"Alt Plant 2\"]\n\
         }}",
        annex,
        locale.language_name(),
    );

    Ok(vec![
        ConversationMessage::system(PLANT_SYSTEM),
        ConversationMessage::user_with_images(prompt, image_urls),
    ])
}

/// Interaction check: one free-text user message requesting the fixed
/// 4-field JSON schema.
pub fn interaction_check(herb: &str, medication: &str) -> Result<Conversation, PromptError> {
    if herb.trim().is_empty() {
        return Err(PromptError::MissingInput("Herb/Supplement"));
    }
    if medication.trim().is_empty() {
        return Err(PromptError::MissingInput("Medication"));
    }

    let prompt = format!(
        "Check for interactions between:\n\
         Herb/Supplement: {}\n\
         Medication: {}\n\n\
         Provide response in JSON format:\n\
         {{\n\
             \"interaction\": boolean,\n\
             \"severity\": \"High\" | \"Moderate\" | \"Low\" | \"None\",\n\
             \"mechanism\": \"Brief explanation of how they interact\",\n\
             \"recommendation\": \"Medical advice\"\n\
         }}",
        herb.trim(),
        medication.trim(),
    );

    Ok(vec![
        ConversationMessage::system(CHAT_SYSTEM),
        ConversationMessage::user(prompt),
    ])
}
