pub const MENU_BANNER: &str = "====== Corner Grocer Item Tracker ======";

pub const MENU: &str = "
====== Corner Grocer Item Tracker ======
1. Look up frequency of a specific item
2. Print all items with frequencies
3. Print histogram of item frequencies
4. Exit
Select an option (1-4): ";

pub const INVALID_CHOICE_PROMPT: &str = "Invalid choice. Enter a number from 1 to 4: ";
pub const ITEM_PROMPT: &str = "Enter item name to search: ";
pub const EMPTY_ITEM_PROMPT: &str = "Input cannot be empty. Try again: ";
pub const FAREWELL: &str = "Goodbye.";
