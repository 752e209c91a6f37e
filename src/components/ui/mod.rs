mod button;
mod modal;
mod spinner;
mod video_background;

pub(crate) use button::Button;
pub(crate) use modal::Modal;
pub(crate) use spinner::Spinner;
pub(crate) use video_background::VideoBackground;

/// Shared form class strings to keep the dialogs and pages visually
/// consistent.
pub(crate) mod classes {
    pub const LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    pub const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    pub const SELECT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white";
}
