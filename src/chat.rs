use crate::models::{Phase, PhaseInsight};

const CRAMPS: &str = "I'm sorry you're experiencing cramps 💕 Here are some tips that might help:\n\n\
• Apply a warm heating pad to your lower abdomen\n\
• Try gentle yoga poses like child's pose\n\
• Stay hydrated with warm herbal teas (ginger or chamomile)\n\
• Consider magnesium-rich foods like dark chocolate and bananas\n\n\
If cramps are severe, it's always a good idea to consult with your healthcare provider.";

const PMS: &str = "PMS can be challenging, but you're not alone 🌸\n\n\
Here's what might help:\n\
• Regular exercise (even gentle walks)\n\
• Limit caffeine and salt intake\n\
• Get enough sleep (7-9 hours)\n\
• Practice mindfulness or meditation\n\
• Eat complex carbs and protein\n\n\
Remember, these feelings are temporary and valid. Be gentle with yourself! 💕";

const SELF_CARE: &str = "Here are some self-care ideas for today 🌸\n\n\
✨ **Physical**\n• Take a warm bath or shower\n• Do some gentle stretching\n• Get outside for fresh air\n\n\
💆 **Mental**\n• Practice 5 minutes of deep breathing\n• Journal your thoughts\n• Listen to calming music\n\n\
💕 **Emotional**\n• Reach out to a friend\n• Say kind things to yourself\n• Do something that brings you joy";

const NUTRITION: &str = "Great question about nutrition! 🥗\n\n\
Here are foods that support your cycle:\n\n\
**During period:**\n• Iron-rich: spinach, lentils, dark chocolate\n• Anti-inflammatory: turmeric, ginger, salmon\n\n\
**Throughout cycle:**\n• Magnesium: nuts, seeds, avocado\n• Omega-3s: fatty fish, walnuts\n• Fiber: whole grains, vegetables\n\n\
Stay hydrated with water and herbal teas! 💧";

const FALLBACK: &str = "Thank you for sharing that with me 💕\n\n\
I'm here to support your wellness journey. Feel free to ask me about:\n\
• Period symptoms and relief\n\
• Cycle phases and what to expect\n\
• Self-care and wellness tips\n\
• Nutrition for hormonal balance\n\n\
Remember, I'm here to provide general wellness guidance. For medical concerns, please consult a healthcare provider.";

pub const GREETING: &str = "Hi there! 🌸 I'm your wellness companion. I'm here to support you with period care, emotional wellness, and hygiene tips. How can I help you today?";

fn phase_reply(phase: Phase) -> &'static str {
    match phase {
        Phase::Menstrual => "You're in your **menstrual phase** 🩸\n\n\
            This is a time for rest and reflection. Your body is doing important work! Focus on:\n\
            • Rest and gentle movement\n• Iron-rich foods (leafy greens, beans)\n• Staying warm and cozy\n• Self-compassion",
        Phase::Follicular => "You're in your **follicular phase** 🌱\n\n\
            Your energy is rising! This is a great time for:\n\
            • Starting new projects\n• Social activities\n• More intense workouts\n• Creative endeavors",
        Phase::Ovulation => "You're in your **ovulation phase** ✨\n\n\
            You're at peak energy and confidence! Perfect for:\n\
            • Important meetings or conversations\n• High-intensity exercise\n• Socializing and connecting\n• Taking on challenges",
        Phase::Luteal => "You're in your **luteal phase** 🌙\n\n\
            Time to slow down and nurture yourself:\n\
            • Gentle yoga and walks\n• Comfort foods (healthy ones!)\n• Extra self-care rituals\n• Preparing for rest",
        Phase::Unknown => "I don't have your cycle data yet. Log your period in the tracker to get personalized phase insights! 📅",
    }
}

/// Headline and one-line tip shown alongside the cycle summary.
pub fn phase_info(phase: Phase) -> PhaseInsight {
    let (name, tip) = match phase {
        Phase::Menstrual => ("Menstrual Phase", "Rest and nourish. Focus on iron-rich foods."),
        Phase::Follicular => ("Follicular Phase", "Energy is rising! Great time for new projects."),
        Phase::Ovulation => ("Ovulation Phase", "Peak energy and confidence. Socialize!"),
        Phase::Luteal => ("Luteal Phase", "Slow down, practice self-care, stay hydrated."),
        Phase::Unknown => ("Track Your Cycle", "Log your period to get personalized insights."),
    };
    PhaseInsight { name, tip }
}

/// Canned reply for `message`; the first matching topic wins.
pub fn respond(message: &str, phase: Phase) -> &'static str {
    let msg = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| msg.contains(w));

    if mentions(&["cramp", "pain"]) {
        CRAMPS
    } else if mentions(&["pms", "mood swing"]) {
        PMS
    } else if mentions(&["phase", "cycle"]) {
        phase_reply(phase)
    } else if mentions(&["self-care", "tips"]) {
        SELF_CARE
    } else if mentions(&["food", "eat", "diet"]) {
        NUTRITION
    } else {
        FALLBACK
    }
}
