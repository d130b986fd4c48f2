mod participant_tests;
