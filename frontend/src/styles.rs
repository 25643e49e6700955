pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-orange-400 via-yellow-400 to-orange-500 flex flex-col";
pub const PAGE_WHEEL: &str = "min-h-screen bg-gradient-to-br from-yellow-400 via-orange-400 to-yellow-500 flex flex-col";
pub const HEADER: &str = "text-white p-4 text-center bg-[#0f151b]";
pub const HEADER_TAGLINE: &str = "text-sm font-medium";
pub const CONTENT: &str = "flex-1 flex flex-col items-center justify-center p-6 max-w-2xl mx-auto w-full";
pub const CARD: &str = "bg-white rounded-lg shadow-xl p-8 w-full";
pub const CARD_CENTERED: &str = "bg-white rounded-lg shadow-xl p-8 w-full text-center";

pub const PROGRESS_TRACK: &str = "w-full bg-gray-200 rounded-full h-3";
pub const PROGRESS_FILL: &str = "bg-orange-500 h-3 rounded-full transition-all duration-300 ease-out";
pub const PROGRESS_CAPTION: &str = "text-center mt-2 text-sm text-gray-600";

pub const QUESTION_KICKER: &str = "text-orange-600 font-semibold text-lg mb-4";
pub const QUESTION_PROMPT: &str = "text-2xl font-bold text-gray-800 mb-6";
pub const OPTION_ROW: &str = "flex items-center space-x-3 p-3 border rounded-lg hover:bg-gray-50 cursor-pointer w-full text-left";
pub const OPTION_ROW_SELECTED: &str = "flex items-center space-x-3 p-3 border-2 border-orange-500 bg-orange-50 rounded-lg cursor-pointer w-full text-left";
pub const NEXT_BUTTON: &str = "w-full bg-orange-500 hover:bg-orange-600 text-white py-3 text-lg font-semibold rounded-lg disabled:opacity-50 disabled:cursor-not-allowed";

pub const UNLOCK_CALLOUT: &str = "bg-yellow-100 border-l-4 border-yellow-500 p-4 mb-6 text-left";
pub const CTA_PRIMARY: &str = "w-full bg-gradient-to-r from-yellow-500 to-orange-500 hover:from-yellow-600 hover:to-orange-600 text-white py-4 text-lg font-semibold rounded-lg mb-4";
pub const CTA_SECONDARY: &str = "w-full border border-orange-500 text-orange-500 hover:bg-orange-50 bg-transparent py-3 rounded-lg";

pub const SPIN_BUTTON: &str = "bg-gradient-to-r from-orange-500 to-red-500 hover:from-orange-600 hover:to-red-600 text-white px-8 py-4 text-xl font-bold rounded-full disabled:opacity-50 disabled:cursor-not-allowed";
pub const MODAL_OVERLAY: &str = "fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4";
pub const MODAL_CARD: &str = "bg-white rounded-xl shadow-2xl max-w-sm w-full text-center p-6";
pub const MODAL_BUTTON: &str = "w-full bg-purple-600 hover:bg-purple-700 text-white py-3 rounded-lg font-semibold";
