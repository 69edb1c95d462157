// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User-facing usage and help text.

pub const ADD_USAGE: &str = "add: Adds a member.\n\
Parameters: n/NAME p/PHONE e/EMAIL m/MATRICULATION_NUMBER [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com m/A0123456X t/committee";

pub const ARCHIVE_USAGE: &str = "archive: Archives one or more members identified by their index in the displayed list.\n\
Parameters: INDEX[,INDEX]... (each must be a positive integer)\n\
Example: archive 1,3,5";

pub const UNARCHIVE_USAGE: &str = "unarchive: Unarchives one or more members identified by their index in the displayed list.\n\
Parameters: INDEX[,INDEX]... (each must be a positive integer)\n\
Example: unarchive 1,2";

pub const FIND_USAGE: &str = "find: Finds members whose name or tags contain any of the keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice committee";

pub const LIST_USAGE: &str = "list: Lists all active members.\nExample: list";

pub const LIST_ARCHIVED_USAGE: &str = "listarchived: Lists all archived members.\nExample: listarchived";

pub const VIEW_USAGE: &str = "view: Shows the profile of the member identified by their index in the displayed list.\n\
Parameters: INDEX\n\
Example: view 2";

pub const ADD_PAYMENT_USAGE: &str = "addpayment: Adds a payment to one or more members identified by their index in the displayed list.\n\
Parameters: INDEX[,INDEX]... a/AMOUNT d/DATE [r/REMARKS]\n\
Example: addpayment 1,2,5 a/23.50 d/2025-10-09 r/annual dues";

pub const EDIT_PAYMENT_USAGE: &str = "editpayment: Edits one payment of the member identified by their index in the displayed list.\n\
Parameters: INDEX p/PAYMENT_INDEX [a/AMOUNT] [d/DATE] [r/REMARKS]\n\
Example: editpayment 1 p/2 a/30.00 r/corrected";

pub const DELETE_PAYMENT_USAGE: &str = "deletepayment: Deletes payments of the member identified by their index in the displayed list.\n\
Parameters: INDEX p/PAYMENT_INDEX[,PAYMENT_INDEX]...\n\
Example: deletepayment 1 p/1,3";

pub const FIND_PAYMENT_USAGE: &str = "findpayment: Finds payments of the member identified by their index in the displayed list.\n\
Parameters: INDEX a/AMOUNT | r/REMARK | d/DATE (exactly one filter)\n\
Example: findpayment 2 d/2025-01-30";

pub const VIEW_PAYMENT_USAGE: &str = "viewpayment: Shows recorded payments.\n\
Parameters: INDEX or 'all'\n\
Example: viewpayment 1";

pub const UNDO_USAGE: &str = "undo: Reverts the last change to members.\nExample: undo";

pub const REDO_USAGE: &str = "redo: Reapplies the last undone change.\nExample: redo";

pub const HELP_USAGE: &str = "help: Shows the command reference.\nExample: help";

pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";

pub const HELP: &str = concat!(
    "Member management\n",
    "  add n/NAME p/PHONE e/EMAIL m/MATRIC [t/TAG]...    add a new member\n",
    "  list                                              show active members\n",
    "  listarchived                                      show archived members\n",
    "  archive INDEX[,INDEX]...                          archive members\n",
    "  unarchive INDEX[,INDEX]...                        restore archived members\n",
    "  find KEYWORD [MORE_KEYWORDS]...                   search members by name or tag\n",
    "  view INDEX                                        show a member's profile\n",
    "\n",
    "Payment management\n",
    "  addpayment INDEX[,INDEX]... a/AMOUNT d/DATE [r/REMARKS]\n",
    "  editpayment INDEX p/PAYMENT_INDEX [a/AMOUNT] [d/DATE] [r/REMARKS]\n",
    "  deletepayment INDEX p/PAYMENT_INDEX[,PAYMENT_INDEX]...\n",
    "  findpayment INDEX a/AMOUNT | r/REMARK | d/DATE\n",
    "  viewpayment INDEX | all\n",
    "\n",
    "System\n",
    "  undo                                              revert the last change\n",
    "  redo                                              reapply the last undone change\n",
    "  help                                              show this reference\n",
    "  exit                                              quit\n",
    "\n",
    "Dates are YYYY-MM-DD or YYYY-M-D and cannot be in the future.\n",
    "Run 'list' or 'listarchived' before commands that take an INDEX.",
);
