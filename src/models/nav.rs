/// A button-styled link on the landing page. Targets live outside this app's routes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
}

pub const LANDING_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Login to Dashboard",
        href: "/login",
        class: "bg-blue-600 hover:bg-blue-700 text-white font-bold py-3 px-6 rounded-lg transition duration-200",
    },
    NavLink {
        label: "Make a Booking",
        href: "/book",
        class: "bg-green-600 hover:bg-green-700 text-white font-bold py-3 px-6 rounded-lg transition duration-200",
    },
];
