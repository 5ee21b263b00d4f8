//! UI strings in English and Hindi, keyed by [`Label`].

use crate::core::model::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    TabHome,
    TabZones,
    TabTrips,
    TabContacts,
    TabCheckIn,
    TabReport,
    TabAssistant,
    HoldForSos,
    SosSent,
    EmergencyNumbers,
    RiskZones,
    SafeSpots,
    SavedPlaces,
    MarkSafe,
    CheckInRunning,
    Welcome,
}

pub fn text(language: Language, label: Label) -> &'static str {
    match language {
        Language::En => english(label),
        Language::Hi => hindi(label),
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::TabHome => "Home",
        Label::TabZones => "Zones",
        Label::TabTrips => "Trips",
        Label::TabContacts => "Contacts",
        Label::TabCheckIn => "Check-in",
        Label::TabReport => "Report",
        Label::TabAssistant => "Assistant",
        Label::HoldForSos => "Hold SPACE to send SOS",
        Label::SosSent => "SOS sent to your trusted contacts",
        Label::EmergencyNumbers => "Emergency numbers",
        Label::RiskZones => "Risk zones",
        Label::SafeSpots => "Safe spots",
        Label::SavedPlaces => "Saved places",
        Label::MarkSafe => "Press s to mark yourself safe",
        Label::CheckInRunning => "Check-in running",
        Label::Welcome => "Welcome to Saathi",
    }
}

fn hindi(label: Label) -> &'static str {
    match label {
        Label::TabHome => "होम",
        Label::TabZones => "क्षेत्र",
        Label::TabTrips => "यात्राएँ",
        Label::TabContacts => "संपर्क",
        Label::TabCheckIn => "चेक-इन",
        Label::TabReport => "रिपोर्ट",
        Label::TabAssistant => "सहायक",
        Label::HoldForSos => "SOS भेजने के लिए SPACE दबाए रखें",
        Label::SosSent => "आपके भरोसेमंद संपर्कों को SOS भेजा गया",
        Label::EmergencyNumbers => "आपातकालीन नंबर",
        Label::RiskZones => "जोखिम क्षेत्र",
        Label::SafeSpots => "सुरक्षित स्थान",
        Label::SavedPlaces => "सहेजे गए स्थान",
        Label::MarkSafe => "सुरक्षित होने पर s दबाएँ",
        Label::CheckInRunning => "चेक-इन चालू है",
        Label::Welcome => "साथी में आपका स्वागत है",
    }
}
